//! Generates the OpenAPI documentation

use bankdemo_api::config::AppConfig;

fn main() {
    let cfg = AppConfig::load();
    let router = bankdemo_api::http::init_router(&cfg);
    let openapi = bankdemo_api::http::gen_openapi_specs(&router);
    let openapi_str = openapi.to_yaml().unwrap();
    println!("{openapi_str}");
}
