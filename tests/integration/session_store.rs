// Token persistence across sessions

use blogdash::api::ApiMessage;
use blogdash::config::Config;
use blogdash::session::{FileTokenStore, Session, TOKEN_KEY, TokenStore};
use blogdash::ui::AppState;
use blogdash::ui::events::apply_api_message;
use tempfile::TempDir;

#[test]
fn test_token_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    {
        let mut session = Session::from_file(&path);
        assert!(!session.is_authenticated());
        session.set_token("T1").unwrap();
    }

    let session = Session::from_file(&path);
    assert_eq!(session.token(), Some("T1"));

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw[TOKEN_KEY], "T1");
}

#[test]
fn test_login_overwrites_previous_token() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    Session::from_file(&path).set_token("old").unwrap();

    let mut state = AppState::new(Session::from_file(&path));
    apply_api_message(ApiMessage::LoggedIn(Ok("new".into())), &mut state);

    assert_eq!(state.session.token(), Some("new"));
    assert_eq!(
        FileTokenStore::new(&path).load().unwrap().as_deref(),
        Some("new")
    );
}

#[test]
fn test_clear_removes_only_token() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("session.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"authToken": "T1", "theme": "dark"}"#).unwrap();

    let mut session = Session::from_file(&path);
    session.clear().unwrap();
    assert_eq!(session.token(), None);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(raw.get(TOKEN_KEY).is_none());
    assert_eq!(raw["theme"], "dark");
}

#[test]
fn test_config_names_session_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    let token_path = dir.path().join("tok.json");
    std::fs::write(
        &config_path,
        format!(
            "[session]\ntoken_file = {:?}\n",
            token_path.to_string_lossy()
        ),
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(config.token_path().unwrap(), token_path);

    Session::from_file(config.token_path().unwrap())
        .set_token("T9")
        .unwrap();
    assert!(token_path.exists());
}
