//! County selection updates.
//!
//! Map clicks only ever add a county; the picker replaces the selection
//! wholesale. An empty picker value is kept as is here and turned into the
//! capital by [`crate::filter::effective_selection`] when charts render.

use hu_crime_map_crime_models::CAPITAL_COUNTY;

/// Applies a map click to the current selection.
///
/// A county that is already selected leaves the selection unchanged; a new
/// one is appended. A click that hit no region returns the selection as
/// is, or the capital alone if it was empty.
pub fn apply_map_click(current: &mut Vec<String>, clicked: Option<&str>) {
    let Some(county) = clicked else {
        if current.is_empty() {
            current.push(CAPITAL_COUNTY.to_string());
        }
        return;
    };

    if !current.iter().any(|c| c == county) {
        current.push(county.to_string());
    }
}

/// Applies a direct edit of the county picker: the new value replaces the
/// selection.
pub fn apply_picker_change(current: &mut Vec<String>, counties: Vec<String>) {
    *current = counties;
}
