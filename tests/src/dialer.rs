use safedial_common::config::Config;
use safedial_core::{DialError, Family, GateError, SafeDialer};
use std::time::Duration;
use tokio::net::TcpListener;

#[tokio::test]
async fn hostname_resolving_to_loopback_is_denied() {
    // localhost resolves to 127.0.0.1 and/or ::1; both are refused.
    let err = SafeDialer::new().connect("localhost", 443).await.unwrap_err();
    assert_eq!(err.denial(), Some(GateError::UnsafeIp), "{err}");
}

#[tokio::test]
async fn internal_literal_is_denied_with_family_filter() {
    let err = SafeDialer::new()
        .family(Family::V4)
        .connect("10.0.0.1", 80)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "dial tcp 10.0.0.1:80: unsafe IP address");
}

#[tokio::test]
async fn custom_control_can_admit_a_local_listener() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port: u16 = listener.local_addr()?.port();

    let loopback_only = |network: &str, address: &str| -> Result<(), GateError> {
        if network == "tcp4" && address.starts_with("127.0.0.1:") {
            Ok(())
        } else {
            Err(GateError::UnsafeIp)
        }
    };

    let cfg = Config {
        no_dns: true,
        timeout: Duration::from_secs(2),
        ..Config::default()
    };
    let dialer = SafeDialer::with_control(loopback_only)
        .timeout(cfg.timeout)
        .no_dns(cfg.no_dns);

    let (stream, accepted) = tokio::join!(dialer.connect("127.0.0.1", port), listener.accept());
    let stream = stream?;
    let (_, peer) = accepted?;
    assert_eq!(stream.local_addr()?, peer);
    Ok(())
}

#[tokio::test]
async fn config_no_dns_refuses_names() {
    let cfg = Config {
        no_dns: true,
        ..Config::default()
    };
    let err = SafeDialer::from_config(&cfg)
        .connect("example.com", 443)
        .await
        .unwrap_err();
    assert!(matches!(err, DialError::Resolve { .. }), "{err}");
}
