//! Recognized command-line options.

/// One operation selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    NewList,
    List,
    Delete,
    NewTask,
    View,
    Mark,
    Remove,
    Help,
}

pub const ALL_FLAGS: &[Flag] = &[
    Flag::NewList,
    Flag::List,
    Flag::Delete,
    Flag::NewTask,
    Flag::View,
    Flag::Mark,
    Flag::Remove,
    Flag::Help,
];

impl Flag {
    /// Single-character form used in `-Nv` style clusters.
    pub fn short(self) -> char {
        match self {
            Self::NewList => 'N',
            Self::List => 'l',
            Self::Delete => 'd',
            Self::NewTask => 'n',
            Self::View => 'v',
            Self::Mark => 'm',
            Self::Remove => 'r',
            Self::Help => 'h',
        }
    }

    /// Multi-character form used with `--`.
    pub fn long(self) -> &'static str {
        match self {
            Self::NewList => "new-list",
            Self::List => "list",
            Self::Delete => "delete",
            Self::NewTask => "new-task",
            Self::View => "view",
            Self::Mark => "mark",
            Self::Remove => "remove",
            Self::Help => "help",
        }
    }

    /// Resolves a stripped flag name in either form.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_FLAGS.iter().copied().find(|flag| {
            flag.long() == name || {
                let mut chars = name.chars();
                chars.next() == Some(flag.short()) && chars.next().is_none()
            }
        })
    }

    /// Whether `name` is a known long flag.
    pub fn is_long_name(name: &str) -> bool {
        ALL_FLAGS.iter().any(|flag| flag.long() == name)
    }
}
