mod test_utils;

use cloudflare_waf::cloudflare::{GroupMode, WafGroup};
use cloudflare_waf::WafError;
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_string, method, path};
use wiremock::Mock;

use test_utils::*;

fn honey_pot_group() -> WafGroup {
    WafGroup {
        id: GROUP_ID.into(),
        name: "Project Honey Pot".into(),
        description: "Group designed to protect against IP addresses that are a threat and typically used to launch DDoS attacks".into(),
        rules_count: 10,
        modified_rules_count: 2,
        package_id: PACKAGE_ID.into(),
        mode: GroupMode::On,
        allowed_modes: vec![GroupMode::On, GroupMode::Off],
    }
}

fn groups_route() -> String {
    format!("{}/groups", package_route())
}

#[test_log::test(tokio::test)]
async fn list_groups() {
    let (server, client) = setup().await;
    mount_get(&server, &groups_route(), list_envelope(&[GROUP_JSON])).await;

    let groups = client.list_groups(ZONE_ID, PACKAGE_ID).await.unwrap();
    assert_eq!(groups, vec![honey_pot_group()]);
    assert!(groups[0].allows(&groups[0].mode));

    let err = client.list_groups(ZONE_ID, "123").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[test_log::test(tokio::test)]
async fn get_group() {
    let (server, client) = setup().await;
    mount_get(&server, &format!("{}/{}", groups_route(), GROUP_ID), envelope(GROUP_JSON)).await;

    let group = client.get_group(ZONE_ID, PACKAGE_ID, GROUP_ID).await.unwrap();
    assert_eq!(group, honey_pot_group());
}

#[test_log::test(tokio::test)]
async fn update_group() {
    let (server, client) = setup().await;
    let updated = GROUP_JSON.replace(r#""mode": "on""#, r#""mode": "off""#);
    Mock::given(method("PATCH"))
        .and(path(format!("{}/{}", groups_route(), GROUP_ID)))
        .and(body_string(r#"{"mode":"off"}"#))
        .respond_with(json_response(200, envelope(&updated)))
        .expect(1)
        .mount(&server)
        .await;

    let group = client
        .update_group(ZONE_ID, PACKAGE_ID, GROUP_ID, GroupMode::Off)
        .await
        .unwrap();
    assert_eq!(group.mode, GroupMode::Off);
    assert_eq!(group.allowed_modes, vec![GroupMode::On, GroupMode::Off]);
}

#[test_log::test(tokio::test)]
async fn get_group_unknown_id() {
    let (server, client) = setup().await;
    mount_get(&server, &format!("{}/{}", groups_route(), GROUP_ID), envelope(GROUP_JSON)).await;

    client.get_group(ZONE_ID, PACKAGE_ID, GROUP_ID).await.unwrap();
    let err = client.get_group(ZONE_ID, PACKAGE_ID, "123").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[test_log::test(tokio::test)]
async fn unknown_zone_is_remote_error() {
    let (server, client) = setup().await;
    mount_get(&server, &groups_route(), list_envelope(&[GROUP_JSON])).await;

    client.list_groups(ZONE_ID, PACKAGE_ID).await.unwrap();
    let err = client.list_groups("0000", PACKAGE_ID).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[test_log::test(tokio::test)]
async fn unknown_group_mode_is_never_sent() {
    let (server, client) = setup().await;
    Mock::given(method("PATCH"))
        .respond_with(json_response(200, envelope(GROUP_JSON)))
        .expect(0)
        .mount(&server)
        .await;

    let err = client
        .update_group(ZONE_ID, PACKAGE_ID, GROUP_ID, GroupMode::Unknown("partial".into()))
        .await
        .unwrap_err();
    assert!(matches!(err, WafError::InvalidArgument(_)), "got {:?}", err);
}
