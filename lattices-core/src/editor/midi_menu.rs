//! # MIDI Menu
//!
//! Editable fields for the five shift CCs and the listen channel. Text is
//! only parsed when a field is committed; a bad value puts the field back to
//! the last accepted number.

use crate::error::SettingsError;
use crate::settings::{self, MidiSettings, SHIFT_CC_COUNT};
use log::{debug, warn};

/// One of the menu's numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiField {
    /// Shift CC by position, 0-4.
    Cc(usize),
    Channel,
}

impl MidiField {
    pub fn label(self) -> &'static str {
        match self {
            MidiField::Cc(0) => "Shift Left",
            MidiField::Cc(1) => "Shift Right",
            MidiField::Cc(2) => "Shift Up",
            MidiField::Cc(3) => "Shift Down",
            MidiField::Cc(_) => "Home",
            MidiField::Channel => "Channel",
        }
    }

    pub fn all() -> impl Iterator<Item = MidiField> {
        (0..SHIFT_CC_COUNT)
            .map(MidiField::Cc)
            .chain(std::iter::once(MidiField::Channel))
    }
}

#[derive(Debug, Clone)]
pub struct MidiMenu {
    settings: MidiSettings,
    cc_text: [String; SHIFT_CC_COUNT],
    channel_text: String,
    pub setting_changed: bool,
}

impl MidiMenu {
    pub fn new(settings: MidiSettings) -> Self {
        Self {
            settings,
            cc_text: settings.shift_ccs.map(|cc| cc.to_string()),
            channel_text: settings.channel.to_string(),
            setting_changed: false,
        }
    }

    pub fn settings(&self) -> MidiSettings {
        self.settings
    }

    pub fn text(&self, field: MidiField) -> &str {
        match field {
            MidiField::Cc(i) => self.cc_text.get(i).map(String::as_str).unwrap_or_default(),
            MidiField::Channel => &self.channel_text,
        }
    }

    /// Replaces a field's text while the user is typing.
    pub fn edit(&mut self, field: MidiField, text: String) {
        match field {
            MidiField::Cc(i) => {
                if let Some(slot) = self.cc_text.get_mut(i) {
                    *slot = text;
                }
            }
            MidiField::Channel => self.channel_text = text,
        }
    }

    /// Parses a field's text. A new valid value raises `setting_changed`;
    /// an invalid one restores the field and is returned as an error.
    pub fn commit(&mut self, field: MidiField) -> Result<(), SettingsError> {
        let parsed = match field {
            MidiField::Cc(i) if i < SHIFT_CC_COUNT => settings::parse_cc(&self.cc_text[i]),
            MidiField::Cc(i) => {
                warn!("[EDITOR] No shift CC field {}", i);
                return Ok(());
            }
            MidiField::Channel => settings::parse_channel(&self.channel_text),
        };

        match parsed {
            Ok(value) => {
                let slot = match field {
                    MidiField::Cc(i) => &mut self.settings.shift_ccs[i],
                    MidiField::Channel => &mut self.settings.channel,
                };
                if *slot != value {
                    debug!("[EDITOR] {} set to {}", field.label(), value);
                    *slot = value;
                    self.setting_changed = true;
                }
                self.restore(field);
                Ok(())
            }
            Err(e) => {
                warn!("[EDITOR] Rejected {} value: {}", field.label(), e);
                self.restore(field);
                Err(e)
            }
        }
    }

    /// Rewrites a field's text from the accepted value.
    fn restore(&mut self, field: MidiField) {
        match field {
            MidiField::Cc(i) => self.cc_text[i] = self.settings.shift_ccs[i].to_string(),
            MidiField::Channel => self.channel_text = self.settings.channel.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_new_value_raises_flag() {
        let mut menu = MidiMenu::new(MidiSettings::default());
        menu.edit(MidiField::Cc(2), "64".to_string());
        assert!(!menu.setting_changed);
        menu.commit(MidiField::Cc(2)).unwrap();
        assert!(menu.setting_changed);
        assert_eq!(menu.settings().shift_ccs[2], 64);
    }

    #[test]
    fn test_commit_same_value_is_not_a_change() {
        let mut menu = MidiMenu::new(MidiSettings::default());
        menu.edit(MidiField::Channel, " 1".to_string());
        menu.commit(MidiField::Channel).unwrap();
        assert!(!menu.setting_changed);
        assert_eq!(menu.text(MidiField::Channel), "1");
    }

    #[test]
    fn test_invalid_text_reverts_field() {
        let mut menu = MidiMenu::new(MidiSettings::default());
        menu.edit(MidiField::Channel, "17".to_string());
        assert_eq!(menu.commit(MidiField::Channel), Err(SettingsError::InvalidChannel(17)));
        assert_eq!(menu.text(MidiField::Channel), "1");

        menu.edit(MidiField::Cc(0), "left".to_string());
        assert!(menu.commit(MidiField::Cc(0)).is_err());
        assert_eq!(menu.text(MidiField::Cc(0)), "5");
        assert!(!menu.setting_changed);
    }

    #[test]
    fn test_all_fields_listed() {
        let fields: Vec<MidiField> = MidiField::all().collect();
        assert_eq!(fields.len(), 6);
        assert_eq!(fields.last(), Some(&MidiField::Channel));
    }
}
