use std::{borrow::Cow, ffi::OsStr, path::PathBuf};

use rocket::{get, http::ContentType, response::Redirect, routes, uri, Route};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "static/"]
struct StaticAsset;

pub fn routes() -> Vec<Route> {
    routes![get_index, get_asset]
}

#[get("/")]
pub fn get_index() -> Redirect {
    Redirect::to(uri!("/index.html"))
}

#[get("/<file..>", rank = 9)]
pub fn get_asset(file: PathBuf) -> Option<(ContentType, Cow<'static, [u8]>)> {
    let filename = file.display().to_string();
    let asset = StaticAsset::get(&filename)?;
    let content_type = file
        .extension()
        .and_then(OsStr::to_str)
        .and_then(ContentType::from_extension)
        .unwrap_or(ContentType::Bytes);
    Some((content_type, asset.data))
}

#[cfg(test)]
mod tests {
    use crate::web::{self, tests::prelude::*};

    fn setup() -> Client {
        let (client, _) = web::tests::setup(web::mounts());
        client
    }

    #[test]
    fn index_redirects_to_the_landing_page() {
        let client = setup();
        let response = client.get("/").dispatch();
        assert_eq!(response.status(), Status::SeeOther);
        assert_eq!(response.headers().get_one("Location"), Some("/index.html"));
    }

    #[test]
    fn get_landing_page() {
        let client = setup();
        let response = client.get("/index.html").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::HTML));
        let body = response.into_string().unwrap();
        assert!(body.contains("Mergington High School"));
    }

    #[test]
    fn unknown_asset() {
        let client = setup();
        let response = client.get("/no-such-file.css").dispatch();
        assert_eq!(response.status(), Status::NotFound);
    }
}
