//! Static catalogue of installable components
//!
//! Component keys are fixed at build time. Callers may pass unknown keys to
//! install/uninstall; those are filtered out in one place ([`ComponentRegistry::known`])
//! so the sync engine never has to special-case them.

/// A named, independently installable bundle of markdown resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    /// Unique identifier used on the CLI and in the ledger
    pub key: &'static str,
    /// Human-readable label
    pub name: &'static str,
    /// One-line description shown by `aimax list`
    pub description: &'static str,
    /// Path under the packaged source root
    pub source: &'static str,
    /// Path under the destination root
    pub target: &'static str,
    /// Mirror the whole subtree (true) or only top-level `.md` files (false)
    pub recursive: bool,
}

impl Component {
    /// Whether uninstalling this component removes its target directory
    /// outright.
    ///
    /// The commands bundle lives in a nested `commands/aimax/` namespace that
    /// aimax owns entirely, so it is deleted as a subtree. Every other
    /// component shares its target directory with user files and only its
    /// immediate entries are removed.
    pub fn owns_target_dir(&self) -> bool {
        self.key == "commands"
    }
}

/// Builtin component descriptors, in display order.
const BUILTINS: &[Component] = &[
    Component {
        key: "agents",
        name: "Agents",
        description: "Specialised subagent definitions",
        source: "agents",
        target: "agents",
        recursive: false,
    },
    Component {
        key: "rules",
        name: "Rules",
        description: "Coding rules and conventions",
        source: "rules",
        target: "rules",
        recursive: false,
    },
    Component {
        key: "commands",
        name: "Commands",
        description: "Slash command set (installed under commands/aimax)",
        source: "commands",
        target: "commands/aimax",
        recursive: true,
    },
    Component {
        key: "skills",
        name: "Skills",
        description: "Reusable skill packages",
        source: "skills",
        target: "skills",
        recursive: true,
    },
];

/// Immutable registry of all installable components.
///
/// Built once at process start and shared by reference with the sync engine
/// and the status inspector.
#[derive(Debug, Clone)]
pub struct ComponentRegistry {
    components: &'static [Component],
}

impl ComponentRegistry {
    /// Create a registry populated with the builtin components.
    pub fn with_builtins() -> Self {
        Self {
            components: BUILTINS,
        }
    }

    /// Look up a component by key.
    pub fn get(&self, key: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.key == key)
    }

    /// All components in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }

    /// All component keys in display order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.components.iter().map(|c| c.key).collect()
    }

    /// Filter a caller-supplied key list down to known components,
    /// preserving caller order. Unknown keys are dropped silently.
    pub fn known<S: AsRef<str>>(&self, keys: &[S]) -> Vec<&Component> {
        keys.iter().filter_map(|k| self.get(k.as_ref())).collect()
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
