#![forbid(unsafe_code)]

//! Resistance-tag editor: a preset picker plus a list of editable tag rows.
//!
//! Tags serialize to a JSON array of `{"name": ..., "val": ...}` objects — the
//! shape the host database stores in its text field. Parsing is forgiving:
//! malformed or non-array input is treated as "no tags" and never surfaces an
//! error (the host's data is authoritative; this editor only presents it).

use cryogrid_core::event::{Event, EventOutcome, KeyEvent, WheelDelta};
use cryogrid_core::geometry::Rect;
use cryogrid_i18n::StringCatalog;
use cryogrid_paint::{Canvas, DrawCmd, FontSpec, Rgba, TextAlign};
use cryogrid_style::Theme;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::wheel::{WheelRouting, wheel_policy};

/// Built-in fallback for the picker placeholder entry.
const ADD_RESISTANCE_FALLBACK: &str = "Add resistance...";
/// Built-in fallback for the value-field placeholder.
const CONCENTRATION_FALLBACK: &str = "Conc.";

/// One resistance marker annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Marker name (preset or free text).
    pub name: String,
    /// Concentration/value text, empty until the user fills it in.
    #[serde(rename = "val", default)]
    pub value: String,
}

impl Tag {
    /// Create a tag with an empty value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
        }
    }

    /// Create a tag with a value.
    #[must_use]
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Parse the stored JSON array. Malformed or non-array input yields no tags.
///
/// Unknown object fields are ignored; a missing `val` defaults to empty.
#[must_use]
pub fn tags_from_json(s: &str) -> Vec<Tag> {
    serde_json::from_str(s).unwrap_or_default()
}

/// Serialize tags back to the stored JSON array shape.
#[must_use]
pub fn tags_to_json(tags: &[Tag]) -> String {
    // Serializing plain strings cannot fail.
    serde_json::to_string(tags).unwrap_or_else(|_| "[]".to_owned())
}

/// Visual style for a tag row, derived from the current theme.
#[derive(Debug, Clone, PartialEq)]
pub struct RowStyle {
    /// Chip background (theme accent).
    pub chip_bg: Rgba,
    /// Chip label text.
    pub chip_fg: Rgba,
    /// Value text.
    pub value_fg: Rgba,
    /// Placeholder text in an empty value field.
    pub placeholder_fg: Rgba,
    /// The `×` remove glyph.
    pub remove_fg: Rgba,
}

impl RowStyle {
    /// Derive the row style from a theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        Self {
            chip_bg: theme.accent,
            chip_fg: theme.btn_text,
            value_fg: theme.text_main,
            placeholder_fg: theme.text_sub,
            remove_fg: theme.text_sub,
        }
    }
}

impl Default for RowStyle {
    fn default() -> Self {
        Self::for_theme(&Theme::light())
    }
}

/// Chip height inside a row.
const CHIP_HEIGHT: f32 = 32.0;
/// Chip corner radius.
const CHIP_RADIUS: f32 = 8.0;
/// Horizontal gap between row elements.
const ROW_SPACING: f32 = 12.0;
/// Side length of the remove control.
const REMOVE_SIZE: f32 = 30.0;

/// One editable (name, value) pair with a remove control.
#[derive(Debug, Clone, PartialEq)]
pub struct TagRow {
    tag: Tag,
    value_placeholder: String,
}

impl TagRow {
    /// Create a row for a tag.
    #[must_use]
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            value_placeholder: CONCENTRATION_FALLBACK.to_owned(),
        }
    }

    /// The marker name shown on the chip.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.tag.name
    }

    /// The current value text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.tag.value
    }

    /// Edit the value text.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.tag.value = value.into();
    }

    /// The underlying tag.
    #[must_use]
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Re-resolve the value placeholder for the current language.
    pub fn refresh_language(&mut self, catalog: &StringCatalog) {
        self.value_placeholder = catalog
            .get_or("concentration_placeholder", CONCENTRATION_FALLBACK)
            .to_owned();
    }

    /// Paint the row: name chip, value field text, remove glyph.
    #[must_use]
    pub fn render(&self, rect: Rect, style: &RowStyle) -> Vec<DrawCmd> {
        let mut canvas = Canvas::new();

        let chip_w = (rect.width * 0.35).min(120.0);
        let chip = Rect::new(
            rect.x,
            rect.y + (rect.height - CHIP_HEIGHT) / 2.0,
            chip_w,
            CHIP_HEIGHT,
        );
        canvas.rounded_rect(chip, CHIP_RADIUS, style.chip_bg);
        canvas.text(
            chip,
            self.tag.name.clone(),
            style.chip_fg,
            FontSpec::bold(9.0),
            TextAlign::Center,
        );

        let value_x = chip.right() + ROW_SPACING;
        let value_w = (rect.right() - REMOVE_SIZE - ROW_SPACING - value_x).max(0.0);
        let value_rect = Rect::new(value_x, rect.y, value_w, rect.height);
        if self.tag.value.is_empty() {
            canvas.text(
                value_rect,
                self.value_placeholder.clone(),
                style.placeholder_fg,
                FontSpec::regular(9.0),
                TextAlign::Center,
            );
        } else {
            canvas.text(
                value_rect,
                self.tag.value.clone(),
                style.value_fg,
                FontSpec::regular(9.0),
                TextAlign::Center,
            );
        }

        let remove = Rect::new(
            rect.right() - REMOVE_SIZE,
            rect.y + (rect.height - REMOVE_SIZE) / 2.0,
            REMOVE_SIZE,
            REMOVE_SIZE,
        );
        canvas.text(
            remove,
            "×",
            style.remove_fg,
            FontSpec::bold(11.0),
            TextAlign::Center,
        );

        canvas.finish()
    }
}

/// The combined placeholder + preset picker above the rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TagPicker {
    placeholder: String,
    presets: Vec<String>,
    selected: usize,
    focused: bool,
    text: String,
}

impl TagPicker {
    /// Create a picker over preset marker names.
    #[must_use]
    pub fn new<I, S>(presets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            placeholder: ADD_RESISTANCE_FALLBACK.to_owned(),
            presets: presets.into_iter().map(Into::into).collect(),
            selected: 0,
            focused: false,
            text: String::new(),
        }
    }

    /// Entry count: the placeholder plus all presets.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.presets.len() + 1
    }

    /// Entry label at an index (0 is the placeholder).
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&str> {
        if index == 0 {
            Some(&self.placeholder)
        } else {
            self.presets.get(index - 1).map(String::as_str)
        }
    }

    /// Currently selected entry index.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The placeholder label ("Add resistance..." in English).
    #[must_use]
    pub fn placeholder_label(&self) -> &str {
        &self.placeholder
    }

    /// Whether the picker holds input focus.
    #[must_use]
    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Grant or revoke input focus.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// The free-text entry line.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the free-text entry line.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Move the selection one notch; clamped at both ends.
    fn scroll(&mut self, delta: WheelDelta) {
        self.selected = match delta {
            WheelDelta::Up => self.selected.saturating_sub(1),
            WheelDelta::Down => (self.selected + 1).min(self.entry_count() - 1),
        };
    }

    /// Reset the selection back to the placeholder entry.
    fn reset(&mut self) {
        self.selected = 0;
    }

    /// Rebuild entries for the current language, preserving the selection.
    pub fn refresh_language(&mut self, catalog: &StringCatalog) {
        self.placeholder = catalog
            .get_or("add_resistance", ADD_RESISTANCE_FALLBACK)
            .to_owned();
        self.selected = self.selected.min(self.entry_count() - 1);
    }
}

/// Notification from the tag editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagEditorEvent {
    /// The tag list changed; re-read via [`TagEditor::get_data`].
    Changed,
    /// A row was detached (index before removal).
    RowRemoved(usize),
}

/// The tag editor widget: picker plus owned rows.
///
/// Invariant: the visible row count always equals the length of the owned tag
/// sequence — rows are the tags.
#[derive(Debug, Clone)]
pub struct TagEditor {
    rows: Vec<TagRow>,
    picker: TagPicker,
    row_style: RowStyle,
    suspended: bool,
    pending: Vec<TagEditorEvent>,
}

impl TagEditor {
    /// Create an editor over preset marker names.
    #[must_use]
    pub fn new<I, S>(presets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: Vec::new(),
            picker: TagPicker::new(presets),
            row_style: RowStyle::default(),
            suspended: false,
            pending: Vec::new(),
        }
    }

    /// The picker component.
    #[must_use]
    pub fn picker(&self) -> &TagPicker {
        &self.picker
    }

    /// Mutable picker access (focus management by the host).
    pub fn picker_mut(&mut self) -> &mut TagPicker {
        &mut self.picker
    }

    /// Owned rows, in display order.
    #[must_use]
    pub fn rows(&self) -> &[TagRow] {
        &self.rows
    }

    /// Mutable row access (value editing by the host's text fields).
    pub fn row_mut(&mut self, index: usize) -> Option<&mut TagRow> {
        self.rows.get_mut(index)
    }

    /// Number of rows (equals the number of tags, always).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the editor holds no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replace all rows from the stored JSON array.
    ///
    /// Notifications stay suspended for the whole load; a programmatic load
    /// must not re-trigger the host's change listener.
    pub fn set_data(&mut self, json: &str) {
        let was_suspended = self.suspended;
        self.suspended = true;
        self.rows.clear();
        for tag in tags_from_json(json) {
            self.push_row(tag);
        }
        self.suspended = was_suspended;
    }

    /// Serialize the current rows back to the stored JSON array shape.
    #[must_use]
    pub fn get_data(&self) -> String {
        let tags: Vec<Tag> = self.rows.iter().map(|r| r.tag.clone()).collect();
        tags_to_json(&tags)
    }

    /// Append a tag with an empty value.
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.add_tag_with_value(name, "");
    }

    /// Append a tag with a value.
    pub fn add_tag_with_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let tag = Tag::with_value(name, value);
        debug!(name = %tag.name, "tag added");
        self.push_row(tag);
        self.notify(TagEditorEvent::Changed);
    }

    /// Detach the row at `index`.
    pub fn remove_row(&mut self, index: usize) {
        if index >= self.rows.len() {
            return;
        }
        let row = self.rows.remove(index);
        debug!(name = %row.tag.name, index, "tag removed");
        self.notify(TagEditorEvent::RowRemoved(index));
        self.notify(TagEditorEvent::Changed);
    }

    /// Pick an entry from the picker by index.
    ///
    /// Index 0 is the placeholder and a no-op; any other valid index appends
    /// that preset and resets the picker to the placeholder.
    pub fn pick(&mut self, index: usize) {
        if index == 0 {
            return;
        }
        let Some(name) = self.picker.entry(index).map(str::to_owned) else {
            return;
        };
        self.add_tag(name);
        self.picker.reset();
    }

    /// Confirm the picker's free-text line.
    ///
    /// Empty text and text equal to the placeholder label are no-ops.
    pub fn confirm_text(&mut self) {
        let text = self.picker.text().trim().to_owned();
        if text.is_empty() || text == self.picker.placeholder_label() {
            return;
        }
        self.add_tag(text);
        self.picker.set_text("");
        self.picker.reset();
    }

    /// Suspend or resume change notifications (programmatic value loads).
    pub fn suspend_notifications(&mut self, suspended: bool) {
        self.suspended = suspended;
    }

    /// Drain pending notifications.
    #[must_use]
    pub fn poll_events(&mut self) -> Vec<TagEditorEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Route an input event.
    ///
    /// Wheel input goes through the focus-gated policy: an unfocused picker
    /// leaves the notch for the surrounding scroll area, so scrolling the
    /// detail panel can never move the picker selection.
    pub fn handle_event(&mut self, event: &Event) -> EventOutcome {
        match event {
            Event::Wheel(wheel) => match wheel_policy(self.picker.focused()) {
                WheelRouting::Deliver => {
                    self.picker.scroll(wheel.delta);
                    EventOutcome::Consumed
                }
                WheelRouting::PassToParent => EventOutcome::Ignored,
            },
            Event::Key(KeyEvent::Enter) if self.picker.focused() => {
                self.confirm_text();
                EventOutcome::Consumed
            }
            Event::Key(KeyEvent::Char(c)) if self.picker.focused() => {
                self.picker.text.push(*c);
                EventOutcome::Consumed
            }
            Event::Key(KeyEvent::Backspace) if self.picker.focused() => {
                self.picker.text.pop();
                EventOutcome::Consumed
            }
            Event::Focus(focused) => {
                self.picker.set_focused(*focused);
                EventOutcome::Consumed
            }
            _ => EventOutcome::Ignored,
        }
    }

    /// Re-apply the current theme's colors.
    pub fn refresh_theme(&mut self, theme: &Theme) {
        self.row_style = RowStyle::for_theme(theme);
    }

    /// Re-resolve all strings for the current language.
    pub fn refresh_language(&mut self, catalog: &StringCatalog) {
        self.picker.refresh_language(catalog);
        for row in &mut self.rows {
            row.refresh_language(catalog);
        }
    }

    /// Paint one row into its rectangle with the current row style.
    #[must_use]
    pub fn render_row(&self, index: usize, rect: Rect) -> Vec<DrawCmd> {
        self.rows
            .get(index)
            .map(|row| row.render(rect, &self.row_style))
            .unwrap_or_default()
    }

    fn push_row(&mut self, tag: Tag) {
        self.rows.push(TagRow::new(tag));
    }

    fn notify(&mut self, event: TagEditorEvent) {
        if !self.suspended {
            self.pending.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryogrid_core::event::WheelEvent;
    use proptest::prelude::*;

    const PRESETS: [&str; 3] = ["AmpR", "KanR", "CmR"];

    fn editor() -> TagEditor {
        TagEditor::new(PRESETS)
    }

    #[test]
    fn set_data_replaces_rows() {
        let mut e = editor();
        e.add_tag("stale");
        let _ = e.poll_events();

        e.set_data(r#"[{"name":"AmpR","val":"100 µg/mL"},{"name":"KanR"}]"#);
        assert_eq!(e.len(), 2);
        assert_eq!(e.rows()[0].name(), "AmpR");
        assert_eq!(e.rows()[0].value(), "100 µg/mL");
        // Missing "val" defaults to empty.
        assert_eq!(e.rows()[1].value(), "");
        // Programmatic load emits nothing.
        assert!(e.poll_events().is_empty());
    }

    #[test]
    fn malformed_input_clears_silently() {
        for bad in ["{nope", "42", r#"{"name":"x"}"#, "null", ""] {
            let mut e = editor();
            e.add_tag("existing");
            e.set_data(bad);
            assert!(e.is_empty(), "input {bad:?} should clear the editor");
        }
    }

    #[test]
    fn round_trip_preserves_tags() {
        let mut e = editor();
        e.set_data(r#"[{"name":"AmpR","val":"50"},{"name":"KanR","val":""}]"#);
        let json = e.get_data();

        let mut e2 = editor();
        e2.set_data(&json);
        assert_eq!(
            e2.rows().iter().map(TagRow::tag).collect::<Vec<_>>(),
            e.rows().iter().map(TagRow::tag).collect::<Vec<_>>()
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let tags = tags_from_json(r##"[{"name":"AmpR","val":"5","color":"#FF0000","id":7}]"##);
        assert_eq!(tags, vec![Tag::with_value("AmpR", "5")]);
    }

    #[test]
    fn add_and_remove_fire_change_notifications() {
        let mut e = editor();
        e.add_tag("AmpR");
        assert_eq!(e.poll_events(), vec![TagEditorEvent::Changed]);

        e.add_tag("KanR");
        let _ = e.poll_events();
        e.remove_row(0);
        assert_eq!(
            e.poll_events(),
            vec![TagEditorEvent::RowRemoved(0), TagEditorEvent::Changed]
        );
        assert_eq!(e.len(), 1);
        assert_eq!(e.rows()[0].name(), "KanR");
    }

    #[test]
    fn remove_out_of_range_is_a_quiet_no_op() {
        let mut e = editor();
        e.add_tag("AmpR");
        let _ = e.poll_events();
        e.remove_row(5);
        assert_eq!(e.len(), 1);
        assert!(e.poll_events().is_empty());
    }

    #[test]
    fn suspended_notifications_are_dropped() {
        let mut e = editor();
        e.suspend_notifications(true);
        e.add_tag("AmpR");
        assert!(e.poll_events().is_empty());
        e.suspend_notifications(false);
        e.add_tag("KanR");
        assert_eq!(e.poll_events(), vec![TagEditorEvent::Changed]);
    }

    #[test]
    fn picking_placeholder_is_a_no_op() {
        let mut e = editor();
        e.pick(0);
        assert!(e.is_empty());
        assert!(e.poll_events().is_empty());
    }

    #[test]
    fn picking_a_preset_appends_and_resets() {
        let mut e = editor();
        e.pick(1);
        assert_eq!(e.len(), 1);
        assert_eq!(e.rows()[0].name(), "AmpR");
        assert_eq!(e.rows()[0].value(), "");
        assert_eq!(e.picker().selected(), 0);
    }

    #[test]
    fn confirm_free_text_appends_unless_placeholder() {
        let mut e = editor();
        e.picker_mut().set_text("  TetR  ");
        e.confirm_text();
        assert_eq!(e.rows()[0].name(), "TetR");
        assert_eq!(e.picker().text(), "");

        e.picker_mut().set_text("Add resistance...");
        e.confirm_text();
        assert_eq!(e.len(), 1);

        e.picker_mut().set_text("   ");
        e.confirm_text();
        assert_eq!(e.len(), 1);
    }

    #[test]
    fn unfocused_wheel_never_moves_the_selection() {
        let mut e = editor();
        assert!(!e.picker().focused());
        let outcome = e.handle_event(&Event::Wheel(WheelEvent::down()));
        assert_eq!(outcome, EventOutcome::Ignored);
        assert_eq!(e.picker().selected(), 0);
        assert!(e.is_empty());
    }

    #[test]
    fn focused_wheel_moves_the_selection() {
        let mut e = editor();
        e.handle_event(&Event::Focus(true));
        let outcome = e.handle_event(&Event::Wheel(WheelEvent::down()));
        assert_eq!(outcome, EventOutcome::Consumed);
        assert_eq!(e.picker().selected(), 1);

        // Clamped at the last entry.
        for _ in 0..10 {
            let _ = e.handle_event(&Event::Wheel(WheelEvent::down()));
        }
        assert_eq!(e.picker().selected(), PRESETS.len());

        let _ = e.handle_event(&Event::Wheel(WheelEvent::up()));
        assert_eq!(e.picker().selected(), PRESETS.len() - 1);
    }

    #[test]
    fn typed_text_confirms_through_the_event_path() {
        let mut e = editor();
        e.handle_event(&Event::Focus(true));
        for c in "GmR".chars() {
            let _ = e.handle_event(&Event::Key(KeyEvent::Char(c)));
        }
        let _ = e.handle_event(&Event::Key(KeyEvent::Enter));
        assert_eq!(e.len(), 1);
        assert_eq!(e.rows()[0].name(), "GmR");
    }

    #[test]
    fn refresh_language_relabels_placeholder_and_rows() {
        let mut catalog = StringCatalog::new();
        catalog.add_locale(
            "zh",
            [
                ("add_resistance", "添加抗性..."),
                ("concentration_placeholder", "浓度"),
            ],
        );

        let mut e = editor();
        e.add_tag("AmpR");
        e.refresh_language(&catalog);
        assert_eq!(e.picker().placeholder_label(), "添加抗性...");

        // The placeholder shows through an empty value field.
        let cmds = e.render_row(0, Rect::new(0.0, 0.0, 300.0, 40.0));
        assert!(cmds.iter().any(
            |c| matches!(c, DrawCmd::Text { text, .. } if text == "浓度")
        ));
    }

    #[test]
    fn row_render_shows_chip_value_and_remove() {
        let mut e = editor();
        e.add_tag_with_value("AmpR", "100");
        e.refresh_theme(&Theme::light());
        let cmds = e.render_row(0, Rect::new(0.0, 0.0, 300.0, 40.0));

        assert!(matches!(
            cmds[0],
            DrawCmd::RoundedRect { fill, .. } if fill == Theme::light().accent
        ));
        let texts: Vec<&str> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["AmpR", "100", "×"]);
    }

    #[test]
    fn row_count_always_equals_tag_count() {
        let mut e = editor();
        e.set_data(r#"[{"name":"a"},{"name":"b"},{"name":"c"}]"#);
        assert_eq!(e.len(), tags_from_json(&e.get_data()).len());
        e.remove_row(1);
        assert_eq!(e.len(), tags_from_json(&e.get_data()).len());
        e.add_tag("d");
        assert_eq!(e.len(), tags_from_json(&e.get_data()).len());
    }

    proptest! {
        #[test]
        fn json_round_trip_preserves_all_pairs(
            tags in proptest::collection::vec(("[a-zA-Z0-9 µ]{0,12}", "[a-zA-Z0-9 /.]{0,12}"), 0..8)
        ) {
            let input: Vec<Tag> = tags
                .iter()
                .map(|(n, v)| Tag::with_value(n.clone(), v.clone()))
                .collect();

            let mut e = TagEditor::new(PRESETS);
            e.set_data(&tags_to_json(&input));
            let output = tags_from_json(&e.get_data());
            prop_assert_eq!(output, input);
        }
    }
}
