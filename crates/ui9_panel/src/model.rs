//! Panel labels and how control events change them

use crate::modules::{sym, PanelModule};
use crate::windows::WindowEntry;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use ui9_app::ControlEvent;

/// Everything the top bar prints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelModel {
    pub desktop_up: bool,
    pub desktop: String,
    pub net: String,
    pub clock: String,
    pub preset: String,
    /// Full label of the current window; fitted at draw time.
    pub workspace: String,
    pub notify: u32,
}

impl Default for PanelModel {
    fn default() -> Self {
        Self {
            desktop_up: false,
            desktop: "de: down".to_string(),
            net: "net".to_string(),
            clock: "00:00:00".to_string(),
            preset: "style: terminal".to_string(),
            workspace: "ws".to_string(),
            notify: 0,
        }
    }
}

impl PanelModel {
    /// React to one line from the control service.
    ///
    /// Reload requests are the context's business; only labels change here.
    pub fn react(&mut self, event: &ControlEvent) {
        match event {
            ControlEvent::Ok(_) => {
                self.desktop_up = true;
                self.desktop = "de: ok".to_string();
            }
            ControlEvent::Err(_) => {
                self.desktop = "de: err".to_string();
                self.notify = self.notify.saturating_add(1);
            }
            ControlEvent::Down => {
                self.desktop_up = false;
                self.desktop = "de: down".to_string();
            }
            ControlEvent::Status(_) => {}
        }
        if let Some(preset) = event.preset() {
            self.preset = format!("style: {preset}");
        }
    }

    /// Initial indicator from whether the service socket exists.
    pub fn check_service(&mut self, socket: &Path) {
        self.desktop_up = socket.exists();
        self.desktop = if self.desktop_up { "de: ok" } else { "de: down" }.to_string();
    }

    /// Periodic check: only ever downgrades the indicator.
    pub fn watch_service(&mut self, socket: &Path) {
        if !socket.exists() {
            self.desktop_up = false;
            self.desktop = "de: down".to_string();
        }
    }

    pub fn set_clock(&mut self, now: SystemTime) {
        let secs = now.duration_since(UNIX_EPOCH).map_or(0, |d| d.as_secs());
        self.clock = clock_label(secs);
    }

    /// Take the current window's label. Keeps the previous one when no
    /// window is current.
    pub fn set_windows(&mut self, windows: &[WindowEntry]) {
        if let Some(w) = windows.iter().find(|w| w.current) {
            self.workspace.clone_from(&w.label);
        }
        if self.workspace.is_empty() {
            self.workspace = "ws".to_string();
        }
    }

    /// Text a module prints. The workspace label is the unfitted one.
    pub fn label(&self, module: PanelModule, ascii: bool) -> String {
        match module {
            PanelModule::Menu => format!("{} 9DE", sym(ascii, "≡", "MENU")),
            PanelModule::Workspace => self.workspace.clone(),
            PanelModule::Desktop => self.desktop.clone(),
            PanelModule::Net => self.net.clone(),
            PanelModule::Clock => self.clock.clone(),
            PanelModule::Preset => self.preset.clone(),
            PanelModule::Notify => {
                let dot = sym(ascii, "•", "!");
                if self.notify > 0 {
                    format!("{dot} {}", self.notify)
                } else {
                    dot.to_string()
                }
            }
        }
    }
}

/// `HH:MM:SS` of the UTC day.
pub fn clock_label(epoch_secs: u64) -> String {
    let s = epoch_secs % 86_400;
    format!("{:02}:{:02}:{:02}", s / 3600, s / 60 % 60, s % 60)
}

/// Address from an interface status text (`... ip=10.0.2.15 ...`), at most
/// 63 characters.
pub fn parse_ip(status: &str) -> Option<String> {
    let (_, rest) = status.split_once("ip=")?;
    let ip: String = rest
        .chars()
        .take_while(|c| *c != ' ' && *c != '\n')
        .take(63)
        .collect();
    Some(ip)
}

/// Network label from the first readable interface under `net_root`, or
/// plain `net`.
pub fn net_label(net_root: &Path) -> String {
    ["ipifc/0/status", "ipifc/1/status"]
        .iter()
        .find_map(|p| fs::read_to_string(net_root.join(p)).ok())
        .and_then(|s| parse_ip(&s))
        .unwrap_or_else(|| "net".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui9_ctl::Status;

    fn ev(line: &str) -> ControlEvent {
        ControlEvent::parse(line).unwrap()
    }

    #[test]
    fn test_ok_marks_desktop_up() {
        let mut m = PanelModel::default();
        m.react(&ev("ok boot"));
        assert!(m.desktop_up);
        assert_eq!(m.desktop, "de: ok");
        assert_eq!(m.preset, "style: terminal");
    }

    #[test]
    fn test_setpreset_updates_label() {
        let mut m = PanelModel::default();
        m.react(&ev("ok setpreset glass"));
        assert_eq!(m.preset, "style: glass");
        assert_eq!(m.desktop, "de: ok");
    }

    #[test]
    fn test_err_counts_notifications() {
        let mut m = PanelModel::default();
        m.react(&ev("err setpreset badvalue"));
        m.react(&ev("err unknown"));
        assert_eq!(m.desktop, "de: err");
        assert_eq!(m.notify, 2);
        assert_eq!(m.label(PanelModule::Notify, false), "• 2");
        assert_eq!(m.label(PanelModule::Notify, true), "! 2");
    }

    #[test]
    fn test_status_snapshot_and_down() {
        let mut m = PanelModel::default();
        m.react(&ControlEvent::Status(Status {
            preset: "dark".into(),
            panel: "top".into(),
        }));
        assert_eq!(m.preset, "style: dark");

        m.react(&ev("ok ping"));
        m.react(&ControlEvent::Down);
        assert!(!m.desktop_up);
        assert_eq!(m.desktop, "de: down");
    }

    #[test]
    fn test_service_check() {
        let dir = tempfile::tempdir().unwrap();
        let sock = dir.path().join("9de.sock");
        let mut m = PanelModel::default();

        m.check_service(&sock);
        assert_eq!(m.desktop, "de: down");

        fs::write(&sock, "").unwrap();
        m.check_service(&sock);
        assert_eq!(m.desktop, "de: ok");
        m.check_service(&sock);
        assert_eq!(m.desktop, "de: ok");

        fs::remove_file(&sock).unwrap();
        m.check_service(&sock);
        assert_eq!(m.desktop, "de: down");
    }

    #[test]
    fn test_clock_label() {
        assert_eq!(clock_label(0), "00:00:00");
        assert_eq!(clock_label(86_400 + 3 * 3600 + 4 * 60 + 5), "03:04:05");
        assert_eq!(clock_label(86_399), "23:59:59");
    }

    #[test]
    fn test_workspace_follows_current_window() {
        let mut m = PanelModel::default();
        m.set_windows(&[]);
        assert_eq!(m.workspace, "ws");

        m.set_windows(&[
            WindowEntry::new(1, "rc"),
            WindowEntry::new(2, "acme /sys/src").current(),
        ]);
        assert_eq!(m.workspace, "acme /sys/src");

        // No current window: keep the last label.
        m.set_windows(&[WindowEntry::new(1, "rc")]);
        assert_eq!(m.workspace, "acme /sys/src");
    }

    #[test]
    fn test_net_label() {
        assert_eq!(
            parse_ip("device /net/ether0 maxtu 1514 ip=10.0.2.15 mask\n").as_deref(),
            Some("10.0.2.15")
        );
        assert_eq!(parse_ip("no address"), None);

        let dir = tempfile::tempdir().unwrap();
        assert_eq!(net_label(dir.path()), "net");
        fs::create_dir_all(dir.path().join("ipifc/1")).unwrap();
        fs::write(dir.path().join("ipifc/1/status"), "ip=192.168.1.4\n").unwrap();
        assert_eq!(net_label(dir.path()), "192.168.1.4");
    }

    #[test]
    fn test_menu_label() {
        let m = PanelModel::default();
        assert_eq!(m.label(PanelModule::Menu, false), "≡ 9DE");
        assert_eq!(m.label(PanelModule::Menu, true), "MENU 9DE");
    }
}
