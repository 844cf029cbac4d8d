//! RON I/O
use crate::traits::{ConvertToSerializable, Geometry, RONExport, RONImport};

impl<G: Geometry + ConvertToSerializable> RONExport for G {
    fn to_ron_string(&self) -> String {
        ron::to_string(&self.to_serializable()).unwrap()
    }
}

impl<G: Geometry + ConvertToSerializable> RONImport for G
where
    for<'a> G::SerializableType: serde::Deserialize<'a>,
{
    fn from_ron_string(s: String) -> Self {
        Self::from_serializable(ron::from_str(&s).unwrap())
    }
}
