use std::ops::Deref;

use actdb_db_mem::{Catalog, Connections as CatalogHandle};
use parking_lot::{RwLockReadGuard, RwLockWriteGuard};
use rocket::{
    outcome::try_outcome,
    request::{FromRequest, Outcome},
    Request, State,
};

// Wrapper to be able to implement `FromRequest`
#[derive(Clone)]
pub struct Connections(CatalogHandle);

impl Connections {
    pub fn shared(&self) -> RwLockReadGuard<'_, Catalog> {
        self.0.shared()
    }

    pub fn exclusive(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.0.exclusive()
    }
}

impl From<CatalogHandle> for Connections {
    fn from(catalog: CatalogHandle) -> Self {
        Self(catalog)
    }
}

impl Deref for Connections {
    type Target = CatalogHandle;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Connections {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let connections = try_outcome!(request.guard::<&State<Connections>>().await);
        Outcome::Success(connections.inner().clone())
    }
}
