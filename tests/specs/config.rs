//! Configuration: the generated compose file and the environment.

use berth_engine::{ComposeFile, ServiceSpec};
use serial_test::serial;

use crate::prelude::*;

/// The generated document is what the group tool reads back.
#[tokio::test]
async fn generated_file_is_read_by_the_tool() {
    let stack = Stack::new("cat docker-compose.yml");
    let document = ComposeFile::new()
        .service("db", ServiceSpec::image("postgres:16").env("POSTGRES_PASSWORD", "secret"))
        .service("web", ServiceSpec::build(".").port("8080:80").depends_on("db"));

    let compose = stack.compose();
    let path = compose.write_config(&document).await.unwrap();
    assert_eq!(path, stack.path().join(berth_engine::CONFIG_FILE_NAME));

    let text = compose.config_text().await.unwrap();
    let db = text.find("db:").unwrap();
    let web = text.find("web:").unwrap();
    assert!(db < web, "services keep declaration order:\n{text}");
    assert!(text.contains("postgres:16"));
}

#[test]
#[serial]
fn environment_overrides() {
    std::env::set_var("COMPOSE_CWD", "/srv/stack");
    std::env::set_var("COMPOSE_BIN", "docker compose");

    let config = ComposeConfig::from_env();

    std::env::remove_var("COMPOSE_CWD");
    std::env::remove_var("COMPOSE_BIN");
    assert_eq!(config.working_dir, std::path::PathBuf::from("/srv/stack"));
    assert_eq!(config.program, "docker compose");
    assert_eq!(Compose::new(config).command_line("ps"), "docker compose ps");
}

#[test]
#[serial]
fn environment_defaults() {
    std::env::remove_var("COMPOSE_CWD");
    std::env::remove_var("COMPOSE_BIN");

    let config = ComposeConfig::from_env();

    assert_eq!(config.working_dir, std::env::current_dir().unwrap());
    assert_eq!(config.program, "docker-compose");
    assert_eq!(config.detached_exec_supported, !cfg!(windows));
}
