pub use actdb_boundary::*;

pub mod to_json {
    //! Entity -> JSON

    use super::*;
    use actdb_core::entities as e;

    pub fn activities(from: Vec<e::Activity>) -> Activities {
        from.into()
    }
}
