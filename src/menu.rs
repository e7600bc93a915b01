//! The add-on never touches the host's live menu bar. It describes the menu as
//! data and hands it to a [`Host`], which renders it and calls back with the
//! bound action ids.
//!
//! # Example
//! ```
//! use sheetlift::menu::*;
//!
//! struct Console;
//!
//! impl Host for Console {
//!     fn install_menu(&mut self, menu: &Menu) {
//!         println!("{}", menu.title);
//!     }
//!
//!     fn alert(&mut self, alert: &Alert) -> Button {
//!         println!("{}: {}", alert.title, alert.message);
//!         Button::Ok
//!     }
//! }
//!
//! let mut host = Console;
//! on_open(&mut host);
//! assert_eq!(run_action(&mut host, PLACEHOLDER_ACTION).unwrap(), Button::Ok);
//! ```

use tracing::*;

use crate::AddonError;

/// Action id bound to every demo menu item.
pub const PLACEHOLDER_ACTION: &str = "placeholder";

const PLACEHOLDER_TITLE: &str = "Error";
const PLACEHOLDER_MESSAGE: &str =
    "This button is an example and does not have any real functionality.";

/// A titled menu and its entries, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Menu {
    pub title: String,
    pub entries: Vec<MenuEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum MenuEntry {
    /// A clickable item bound to an action id.
    Item { label: String, action: String },
    Separator,
    SubMenu(Menu),
}

impl Menu {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn item(mut self, label: impl Into<String>, action: impl Into<String>) -> Self {
        self.entries.push(MenuEntry::Item {
            label: label.into(),
            action: action.into(),
        });
        self
    }

    pub fn separator(mut self) -> Self {
        self.entries.push(MenuEntry::Separator);
        self
    }

    pub fn sub_menu(mut self, menu: Menu) -> Self {
        self.entries.push(MenuEntry::SubMenu(menu));
        self
    }

    /// Returns the action ids bound anywhere in the menu, depth-first.
    pub fn actions(&self) -> Vec<&str> {
        let mut actions = Vec::new();
        self.collect_actions(&mut actions);
        actions
    }

    fn collect_actions<'a>(&'a self, actions: &mut Vec<&'a str>) {
        for entry in &self.entries {
            match entry {
                MenuEntry::Item { action, .. } => actions.push(action),
                MenuEntry::Separator => {}
                MenuEntry::SubMenu(menu) => menu.collect_actions(actions),
            }
        }
    }
}

/// The buttons a user can answer an alert with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Button {
    Ok,
    Cancel,
    Yes,
    No,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ButtonSet {
    Ok,
    OkCancel,
    YesNo,
    YesNoCancel,
}

impl ButtonSet {
    pub fn buttons(&self) -> &'static [Button] {
        match self {
            ButtonSet::Ok => &[Button::Ok],
            ButtonSet::OkCancel => &[Button::Ok, Button::Cancel],
            ButtonSet::YesNo => &[Button::Yes, Button::No],
            ButtonSet::YesNoCancel => &[Button::Yes, Button::No, Button::Cancel],
        }
    }
}

/// A blocking dialog shown by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub buttons: ButtonSet,
}

/// The spreadsheet application as seen by the add-on.
pub trait Host {
    /// Builds and displays `menu`, binding each item to its action id.
    fn install_menu(&mut self, menu: &Menu);

    /// Shows `alert` and returns the button the user pressed.
    fn alert(&mut self, alert: &Alert) -> Button;
}

/// The "Example Dropdown" menu registered when the spreadsheet opens.
pub fn addon_menu() -> Menu {
    Menu::new("Example Dropdown")
        .item("Top Button Example", PLACEHOLDER_ACTION)
        .separator()
        .sub_menu(
            Menu::new("Menu Example")
                .item("Button 1", PLACEHOLDER_ACTION)
                .item("Button 2", PLACEHOLDER_ACTION)
                .item("Button 3", PLACEHOLDER_ACTION)
                .item("Button 4", PLACEHOLDER_ACTION),
        )
}

pub fn placeholder_alert() -> Alert {
    Alert {
        title: PLACEHOLDER_TITLE.to_string(),
        message: PLACEHOLDER_MESSAGE.to_string(),
        buttons: ButtonSet::Ok,
    }
}

/// Handles the spreadsheet's open event.
pub fn on_open<H: Host>(host: &mut H) {
    let menu = addon_menu();
    debug!("Installing menu {:?} with {} entries", menu.title, menu.entries.len());
    host.install_menu(&menu);
}

/// Runs the action bound to a menu item and returns the button pressed.
///
/// # Errors
/// Returns [`AddonError::UnknownAction`] if `action` is not bound to anything.
pub fn run_action<H: Host>(host: &mut H, action: &str) -> Result<Button, AddonError> {
    trace!("Running action {}", action);
    match action {
        PLACEHOLDER_ACTION => Ok(host.alert(&placeholder_alert())),
        _ => {
            debug!("No handler bound to action {}", action);
            Err(AddonError::UnknownAction {
                action: action.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::count_error_events;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct RecordingHost {
        menus: Vec<Menu>,
        alerts: Vec<Alert>,
    }

    impl Host for RecordingHost {
        fn install_menu(&mut self, menu: &Menu) {
            self.menus.push(menu.clone());
        }

        fn alert(&mut self, alert: &Alert) -> Button {
            self.alerts.push(alert.clone());
            alert.buttons.buttons()[0]
        }
    }

    #[test]
    fn test_on_open_installs_menu_once() {
        let mut host = RecordingHost::default();
        on_open(&mut host);
        assert_eq!(host.menus, vec![addon_menu()]);
        assert!(host.alerts.is_empty());
    }

    #[test]
    fn test_addon_menu_actions() {
        let menu = addon_menu();
        assert_eq!(menu.actions(), vec![PLACEHOLDER_ACTION; 5]);
        assert_eq!(menu.entries.len(), 3);
        assert_eq!(menu.entries[1], MenuEntry::Separator);
    }

    #[test]
    fn test_every_bound_action_runs() {
        let mut host = RecordingHost::default();
        for action in addon_menu().actions() {
            assert_eq!(run_action(&mut host, action), Ok(Button::Ok));
        }
        assert_eq!(host.alerts.len(), 5);
        assert!(host.alerts.iter().all(|alert| *alert == placeholder_alert()));
    }

    #[test]
    fn test_placeholder_alert() {
        let alert = placeholder_alert();
        assert_eq!(alert.title, "Error");
        assert_eq!(
            alert.message,
            "This button is an example and does not have any real functionality."
        );
        assert_eq!(alert.buttons.buttons(), &[Button::Ok]);
    }

    #[test]
    fn test_unknown_action() {
        let mut host = RecordingHost::default();
        assert_eq!(
            run_action(&mut host, "format_disk"),
            Err(AddonError::UnknownAction {
                action: "format_disk".to_string()
            })
        );
        assert!(host.alerts.is_empty());
    }

    #[test]
    fn test_unknown_action_is_returned_not_logged_as_error() {
        let mut host = RecordingHost::default();
        let (result, errors) = count_error_events(|| run_action(&mut host, "format_disk"));
        assert!(result.is_err());
        assert_eq!(errors, 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_addon_menu_snapshot() {
        insta::assert_yaml_snapshot!(addon_menu(), @r###"
        title: Example Dropdown
        entries:
          - kind: item
            label: Top Button Example
            action: placeholder
          - kind: separator
          - kind: submenu
            title: Menu Example
            entries:
              - kind: item
                label: Button 1
                action: placeholder
              - kind: item
                label: Button 2
                action: placeholder
              - kind: item
                label: Button 3
                action: placeholder
              - kind: item
                label: Button 4
                action: placeholder
        "###);
    }
}
