//! RON I/O
use crate::traits::Geometry;
use std::fs;

pub trait ConvertToSerializable {
    //! Convert to/from a serializable form
    type SerializableType: serde::Serialize;
    /// Convert to a serializable form
    fn to_serializable(&self) -> Self::SerializableType;
    /// Convert from a serializable form
    fn from_serializable(s: Self::SerializableType) -> Self;
}

pub trait RONExport: Geometry {
    //! Geometry export for RON

    /// Generate the RON string for a geometry
    fn to_ron_string(&self) -> String;

    /// Export as RON
    fn export_as_ron(&self, filename: &str) {
        let ron_s = self.to_ron_string();
        fs::write(filename, ron_s).expect("Unable to write file");
    }
}

pub trait RONImport: Sized + Geometry {
    //! Geometry import for RON

    /// Generate a geometry from a RON string
    fn from_ron_string(s: String) -> Self;

    /// Import from RON
    fn import_from_ron(filename: &str) -> Self {
        let content = fs::read_to_string(filename).expect("Unable to read file");
        Self::from_ron_string(content)
    }
}
