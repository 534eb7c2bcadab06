//! Fixed version → URL target table.
//!
//! Each supported version label maps to one fixed remote URL. The table is
//! static configuration; nothing is derived at runtime.

/// One deployable target: a display label bound to a static URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionTarget {
    /// Display label shown in the profile list and create dialog.
    pub label: &'static str,
    /// Remote URL loaded when a profile of this version is launched.
    pub url: &'static str,
}

/// The twelve supported targets, newest first.
pub const VERSION_TARGETS: [VersionTarget; 12] = [
    VersionTarget {
        label: "Live Version [Up-to-Date]",
        url: "https://windows96.net/",
    },
    VersionTarget {
        label: "Version 3.0 [Valentines Edition]",
        url: "https://rel3-wf2514.windows96.net/",
    },
    VersionTarget {
        label: "Version 2.0 [Service Pack 2]",
        url: "https://rel2sp2.windows96.net/",
    },
    VersionTarget {
        label: "Version 2.0 [Service Pack 1]",
        url: "https://rel2sp1.windows96.net/",
    },
    VersionTarget {
        label: "Version 2.0",
        url: "https://rel2.windows96.net/",
    },
    VersionTarget {
        label: "Version 1.0",
        url: "https://rel1.windows96.net/",
    },
    VersionTarget {
        label: "Version 0.5",
        url: "https://rel05.windows96.net/",
    },
    VersionTarget {
        label: "Version 0.4",
        url: "https://rel04.windows96.net/",
    },
    VersionTarget {
        label: "Version 0.3",
        url: "https://rel03.windows96.net/",
    },
    VersionTarget {
        label: "Version 0.2",
        url: "https://rel02.windows96.net/",
    },
    VersionTarget {
        label: "Version 0.1",
        url: "https://rel01.windows96.net/",
    },
    VersionTarget {
        label: "Windows 96 NTXP",
        url: "https://exp1.windows96.net/",
    },
];

/// Look up the URL for a version label (exact match).
pub fn url_for(label: &str) -> Option<&'static str> {
    VERSION_TARGETS
        .iter()
        .find(|target| target.label == label)
        .map(|target| target.url)
}

/// All version labels in display order.
pub fn labels() -> impl Iterator<Item = &'static str> {
    VERSION_TARGETS.iter().map(|target| target.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_twelve_unique_labels() {
        let mut labels: Vec<_> = labels().collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 12);
    }

    #[test]
    fn known_labels_resolve() {
        assert_eq!(url_for("Version 1.0"), Some("https://rel1.windows96.net/"));
        assert_eq!(
            url_for("Live Version [Up-to-Date]"),
            Some("https://windows96.net/")
        );
        assert_eq!(url_for("Windows 96 NTXP"), Some("https://exp1.windows96.net/"));
    }

    #[test]
    fn lookup_is_exact_match() {
        assert_eq!(url_for("version 1.0"), None);
        assert_eq!(url_for("Version 1.0 "), None);
        assert_eq!(url_for(""), None);
    }
}
