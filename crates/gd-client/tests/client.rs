// crates/gd-client/tests/client.rs
use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Once;

use gd_client::{ClientConfig, ClientError, GdClient, Transport, TransportError};
use gd_protocol::{EncodeError, Identity, LevelSearch};

const LEVELS: &str = include_str!("../../gd-protocol/tests/data/level_search.txt");

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Replays canned responses and records what was sent.
#[derive(Default)]
struct FakeTransport {
    responses: RefCell<VecDeque<Result<String, TransportError>>>,
    sent: RefCell<Vec<(String, String)>>,
}

impl FakeTransport {
    fn replying(responses: &[&str]) -> Self {
        let fake = FakeTransport::default();
        for r in responses {
            fake.responses.borrow_mut().push_back(Ok(r.to_string()));
        }
        fake
    }

    fn failing(err: TransportError) -> Self {
        let fake = FakeTransport::default();
        fake.responses.borrow_mut().push_back(Err(err));
        fake
    }

    fn last_sent(&self) -> (String, String) {
        self.sent.borrow().last().cloned().expect("nothing was sent")
    }
}

impl Transport for FakeTransport {
    fn send(&self, path: &str, body: &str) -> Result<String, TransportError> {
        self.sent
            .borrow_mut()
            .push((path.to_string(), body.to_string()));
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok("-1".to_string()))
    }
}

#[test]
fn level_search_round_trip() {
    init_tracing();
    let fake = FakeTransport::replying(&[&format!("{LEVELS}\n")]);
    let client = GdClient::new(&fake);

    let page = client
        .search_levels(&LevelSearch::new("Bloodbath", 0))
        .unwrap();
    assert_eq!(page.len(), 3);
    assert_eq!(page.items[0].name, "Bloodbath");

    let (path, body) = fake.last_sent();
    assert_eq!(path, "/getGJLevels21.php");
    assert!(body.contains("str=Bloodbath"));
    assert!(body.contains("secret=Wmfd2893gb7"));
    assert!(!body.contains("gjp="));
}

#[test]
fn no_results_is_an_empty_page() {
    init_tracing();
    let fake = FakeTransport::replying(&["-1"]);
    let client = GdClient::new(&fake);
    let page = client.search_users("nobody at all", 0).unwrap();
    assert!(page.is_empty());

    let (path, body) = fake.last_sent();
    assert_eq!(path, "/getGJUsers20.php");
    assert!(body.starts_with("str=nobody%20at%20all&page=0&total=0&"));
}

#[test]
fn messages_need_an_identity() {
    init_tracing();
    let fake = FakeTransport::replying(&[]);
    let client = GdClient::new(&fake);

    let err = client.messages(0, false).unwrap_err();
    assert!(matches!(
        err,
        ClientError::Encode(EncodeError::MissingIdentity { .. })
    ));
    assert!(fake.sent.borrow().is_empty(), "nothing should reach the wire");
}

#[test]
fn authenticated_message_read() {
    init_tracing();
    let fake = FakeTransport::replying(&[
        "6:Viprin:3:2795:2:503085:1:9001:4:SGkgZnJpZW5k:8:1:9:0:7:5 hours:5:eVFeWV4RQFpQQ1QV",
    ]);
    let client = GdClient::with_identity(&fake, Identity::new(71, "password"));

    let message = client.read_message(9001, false).unwrap().unwrap();
    assert_eq!(message.subject, "Hi friend");
    assert_eq!(message.body.as_deref(), Some("Hello there!"));

    let (path, body) = fake.last_sent();
    assert_eq!(path, "/downloadGJMessage20.php");
    assert!(body.ends_with("accountID=71&gjp=Q1ZGQUFcRVE="));
}

#[test]
fn forbidden_message_list_is_empty() {
    init_tracing();
    let fake = FakeTransport::replying(&["-2"]);
    let client = GdClient::with_identity(&fake, Identity::new(71, "password"));
    assert!(client.messages(0, true).unwrap().is_empty());
    assert!(fake.last_sent().1.contains("getSent=1"));
}

#[test]
fn song_info_lookup() {
    init_tracing();
    let fake = FakeTransport::replying(&[
        "1~|~803223~|~2~|~Xtrullor - Supernova~|~3~|~1067~|~4~|~Xtrullor~|~5~|~9.46",
        "-1",
    ]);
    let client = GdClient::new(&fake);

    let song = client.song_info(803223).unwrap().unwrap();
    assert_eq!(song.title, "Xtrullor - Supernova");
    assert_eq!(client.song_info(1).unwrap(), None);
    assert!(fake.last_sent().1.starts_with("songID=1&"));
}

#[test]
fn transport_and_decode_errors_are_distinct() {
    init_tracing();
    let down = FakeTransport::failing(TransportError::Status { status: 503 });
    let err = GdClient::new(&down).song_info(5).unwrap_err();
    assert!(err.is_transport());
    assert!(!err.is_decode());

    let garbage = FakeTransport::replying(&["1:abc:2"]);
    let err = GdClient::new(&garbage).search_users("x", 0).unwrap_err();
    assert!(err.is_decode());
    assert!(!err.is_transport());
}

#[test]
fn client_from_config() {
    let config = ClientConfig::from_toml_str("account_id = 71\npassword = \"password\"").unwrap();
    let fake = FakeTransport::default();
    let client = GdClient::from_config(&fake, &config).unwrap();
    assert_eq!(client.identity().map(Identity::account_id), Some(71));
}
