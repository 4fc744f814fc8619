//! The client operations against a shell-hosted service on a temporary socket.

use std::path::Path;
use std::thread;
use ui9_cli::{commands, shell};
use ui9_ctl::{Client, Server};

fn host(path: &Path) -> Client {
    let server = Server::bind(path).unwrap();
    thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let _ = rt.block_on(shell::serve(server));
    });
    Client::new(path)
}

fn words(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}

#[test]
fn shell_announces_itself_after_boot() {
    let dir = tempfile::tempdir().unwrap();
    let client = host(&dir.path().join("9de.sock"));

    let mut events = client.events().unwrap();
    assert_eq!(events.next().unwrap().unwrap(), "ok boot");
    assert_eq!(events.next().unwrap().unwrap(), "shell boot");
}

#[test]
fn ctl_and_status_through_commands() {
    let dir = tempfile::tempdir().unwrap();
    let client = host(&dir.path().join("9de.sock"));

    assert_eq!(commands::ctl(&client, &words("ping")).unwrap(), "ok ping");
    let reply = commands::ctl(&client, &words("setpreset neon")).unwrap();
    assert!(commands::is_rejection(&reply));

    assert_eq!(
        commands::status(&client, false).unwrap(),
        "preset terminal\npanel top\n"
    );
    commands::ctl(&client, &words("setpreset glass")).unwrap();
    let json = commands::status(&client, true).unwrap();
    assert!(json.contains("\"preset\": \"glass\""));
}

#[test]
fn reload_request_reaches_the_service() {
    let dir = tempfile::tempdir().unwrap();
    let client = host(&dir.path().join("9de.sock"));
    assert_eq!(commands::request_reload(&client).as_deref(), Some("ok reload"));
}

#[test]
fn unreachable_service_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let client = Client::new(dir.path().join("absent.sock"));
    assert!(commands::ctl(&client, &words("ping")).is_err());
    assert!(commands::status(&client, false).is_err());
}
