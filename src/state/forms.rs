//! Input forms behind the two search popups.

use crate::state::types::ImageSelection;

/// Raw inputs of the location popup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationForm {
    /// Latitude text as typed.
    pub lat: String,
    /// Longitude text as typed.
    pub lon: String,
    /// Radius (km) text as typed.
    pub radius: String,
    /// Whether the popup is showing.
    pub open: bool,
}

impl LocationForm {
    /// Empty the inputs and close the popup.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Selection state of the image popup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageForm {
    /// File picked by the user, if any.
    pub selected: Option<ImageSelection>,
    /// Whether the popup is showing.
    pub open: bool,
}

impl ImageForm {
    /// Drop the selection and close the popup.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Both search popups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchForms {
    /// Location popup.
    pub location: LocationForm,
    /// Image popup.
    pub image: ImageForm,
}
