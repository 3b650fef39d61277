use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SidebarState {
    pub collapsed: bool,
}

impl SidebarState {
    /// Flip the collapsed flag and return the new value.
    pub const fn toggle(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_is_identity() {
        let mut sidebar = SidebarState { collapsed: true };
        assert!(!sidebar.toggle());
        assert!(sidebar.toggle());
        assert_eq!(sidebar, SidebarState { collapsed: true });
    }
}
