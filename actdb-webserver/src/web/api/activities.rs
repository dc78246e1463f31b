use super::*;

#[get("/activities")]
pub fn get_activities(db: mem::Connections) -> Result<json::Activities> {
    let activities = usecases::load_activities(&*db.shared())?;
    Ok(Json(to_json::activities(activities)))
}

#[post("/activities/<name>/signup?<email>")]
pub fn post_signup(
    db: mem::Connections,
    cfg: &State<Cfg>,
    name: &str,
    email: &str,
) -> Result<json::Confirmation> {
    let email = EmailAddress::from(email);
    flows::signup_student(&db, name, &email, cfg.enforce_capacity)?;
    Ok(Json(json::Confirmation {
        message: format!("Signed up {email} for {name}"),
    }))
}

#[post("/activities/<name>/unregister?<email>")]
pub fn post_unregister(
    db: mem::Connections,
    name: &str,
    email: &str,
) -> Result<json::Confirmation> {
    let email = EmailAddress::from(email);
    flows::unregister_student(&db, name, &email)?;
    Ok(Json(json::Confirmation {
        message: format!("Unregistered {email} from {name}"),
    }))
}
