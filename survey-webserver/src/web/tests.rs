use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use super::sqlite;

pub mod prelude {

    pub const DUMMY_VERSION: &str = "3.2.1";

    pub use rocket::{
        http::{ContentType, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::rocket_test_setup;
}

fn rocket_test_instance_with_cfg(
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: RocketCfg,
) -> (rocket::Rocket<rocket::Build>, sqlite::Connections) {
    let connections =
        survey_db_sqlite::Connections::init(&survey_db_sqlite::Config::in_memory()).unwrap();
    let db = sqlite::Connections::from(connections);
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(rocket_cfg),
        version: prelude::DUMMY_VERSION,
    };
    let rocket = super::rocket_instance(options, db.clone());
    (rocket, db)
}

pub fn rocket_test_setup(mounts: Vec<(&'static str, Vec<Route>)>) -> (Client, sqlite::Connections) {
    let rocket_cfg = RocketCfg::debug_default();
    let (rocket, db) = rocket_test_instance_with_cfg(mounts, rocket_cfg);
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}

#[test]
fn mount_api_below_prefix() {
    let (client, _) = rocket_test_setup(super::mounts());
    let res = client.get("/api/server/version").dispatch();
    assert_eq!(res.status(), prelude::Status::Ok);
    assert_eq!(res.into_string().unwrap(), prelude::DUMMY_VERSION);
    let res = client.get("/server/version").dispatch();
    assert_eq!(res.status(), prelude::Status::NotFound);
}
