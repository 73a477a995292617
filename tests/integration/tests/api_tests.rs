//! API Integration Tests
//!
//! Each test spins up an in-process server over its own seeded store.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::collections::HashSet;

use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, TestServer,
};
use mockrest_common::AppConfig;
use mockrest_core::{Guild, Member, Role};
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_root("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["guilds"], 1);
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get(&paths::guild()).await.unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Guild Tests
// ============================================================================

#[tokio::test]
async fn test_get_guild() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get(&paths::guild()).await.unwrap();
    let guild: Guild = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(guild.id, GUILD_ID);
    assert_eq!(guild.name.as_deref(), Some("Fixture Guild"));
    assert_eq!(guild.roles.len(), 2);
    assert_eq!(guild.members.len(), 2);
    assert_eq!(guild.member_count, 2);
}

#[tokio::test]
async fn test_seeded_member_count_matches_members() {
    let mut guild = seed_guild();
    guild.member_count = 40;

    let server = TestServer::start_with_guilds(vec![guild])
        .await
        .expect("Failed to start server");

    let response = server.get(&paths::guild()).await.unwrap();
    let guild: Guild = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(guild.member_count, 2);
}

#[tokio::test]
async fn test_seed_with_foreign_member_is_rejected() {
    let mut guild = seed_guild();
    guild.members.push(Member::new("g2", "u3"));

    let result = TestServer::start_with_guilds(vec![guild, empty_guild("g2")]).await;
    let err = result.err().expect("Seed should be rejected");
    assert!(err.to_string().contains("member u3 belongs to guild g2"));
}

#[tokio::test]
async fn test_get_guilds() {
    let server = TestServer::start_with_guilds(vec![seed_guild(), empty_guild("g2")])
        .await
        .expect("Failed to start server");

    let response = server.get("/guilds").await.unwrap();
    let guilds: Vec<Guild> = assert_json(response, StatusCode::OK).await.unwrap();

    let ids: Vec<&str> = guilds.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, ["g1", "g2"]);
}

#[tokio::test]
async fn test_unknown_guild() {
    let server = TestServer::start().await.expect("Failed to start server");

    for path in [
        "/guilds/nope",
        "/guilds/nope/roles",
        "/guilds/nope/members",
        "/guilds/nope/members/u1/roles",
    ] {
        let response = server.get(path).await.unwrap();
        let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
        assert_eq!(code, "UNKNOWN_GUILD", "{path}");
    }

    let response = server.post_empty("/guilds/nope/roles").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_routes_require_prefix() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get_root(&paths::guild()).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_empty_prefix_mounts_at_root() {
    let mut config = AppConfig::default();
    config.api.prefix = String::new();

    let server = TestServer::start_with_config(config, vec![seed_guild()])
        .await
        .expect("Failed to start server");

    let response = server.get_root(&paths::guild()).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Role Tests
// ============================================================================

#[tokio::test]
async fn test_empty_guild_role_lifecycle() {
    let server = TestServer::start_with_guilds(vec![empty_guild("g1")])
        .await
        .expect("Failed to start server");

    // A new role carries nothing but its id
    let response = server.post_empty("/guilds/g1/roles").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let fields = body.as_object().unwrap();
    assert_eq!(fields.len(), 1);
    let role_id = fields["id"].as_str().unwrap().to_string();

    let response = server.get("/guilds/g1/roles").await.unwrap();
    let roles: Vec<Role> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(roles, [Role::new(role_id.as_str())]);

    // Assigning onto a missing member fails and creates nobody
    let response = server
        .put(&format!("/guilds/g1/members/ghost/roles/{role_id}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get("/guilds/g1/members").await.unwrap();
    let members: Vec<Member> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(members.is_empty());
}

#[tokio::test]
async fn test_get_roles() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get(&paths::roles()).await.unwrap();
    let roles: Vec<Role> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(roles.len(), 2);

    let response = server.get(&paths::role("r2")).await.unwrap();
    let role: Role = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(role.name.as_deref(), Some("Member"));

    let response = server.get(&paths::role("missing")).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_ROLE");
}

#[tokio::test]
async fn test_create_role_generates_id() {
    let server = TestServer::start().await.expect("Failed to start server");

    // Client-supplied fields are ignored
    let response = server
        .post(&paths::roles(), &json!({ "id": "mine", "name": "Ignored" }))
        .await
        .unwrap();
    let first: Role = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server.post_empty(&paths::roles()).await.unwrap();
    let second: Role = assert_json(response, StatusCode::OK).await.unwrap();

    assert_ne!(first.id, "mine");
    assert_ne!(first.id, second.id);
    assert_eq!(first.name, None);

    let response = server.get(&paths::roles()).await.unwrap();
    let roles: Vec<Role> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(roles.len(), 4);
    assert_eq!(roles[2], first);
    assert_eq!(roles[3], second);
}

#[tokio::test]
async fn test_concurrent_role_creation() {
    let server = TestServer::start().await.expect("Failed to start server");
    let server = std::sync::Arc::new(server);

    let mut handles = Vec::new();
    for _ in 0..20 {
        let server = server.clone();
        handles.push(tokio::spawn(async move {
            let response = server.post_empty(&paths::roles()).await.unwrap();
            let role: Role = assert_json(response, StatusCode::OK).await.unwrap();
            role.id
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }
    assert_eq!(ids.len(), 20);

    let total = server.store.read(|store| store.guild(GUILD_ID).unwrap().roles.len());
    assert_eq!(total, 22);
}

#[tokio::test]
async fn test_update_role_merges_fields() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .patch(&paths::role("r1"), &role_patch("Owner", 0x00ff_00ff))
        .await
        .unwrap();
    let role: Role = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(role.id, "r1");
    assert_eq!(role.name.as_deref(), Some("Owner"));
    assert_eq!(role.color, Some(0x00ff_00ff));

    // Only the named field changes
    let response = server
        .patch(&paths::role("r1"), &json!({ "hoist": true }))
        .await
        .unwrap();
    let role: Role = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(role.name.as_deref(), Some("Owner"));
    assert_eq!(role.hoist, Some(true));

    // The stored record matches the response
    let response = server.get(&paths::role("r1")).await.unwrap();
    let stored: Role = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stored, role);
}

#[tokio::test]
async fn test_update_role_ignores_identity() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .patch(&paths::role("r1"), &json!({ "id": "hijack", "name": "Renamed" }))
        .await
        .unwrap();
    let role: Role = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(role.id, "r1");

    let response = server.get(&paths::role("hijack")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_role_rejects_malformed_body() {
    let server = TestServer::start().await.expect("Failed to start server");

    for body in ["{not json", "[1, 2]", r#"{"color": "red"}"#] {
        let response = server.patch_raw(&paths::role("r1"), body).await.unwrap();
        let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(code, "DECODE_ERROR", "{body}");
    }

    // Store unchanged
    let response = server.get(&paths::role("r1")).await.unwrap();
    let role: Role = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(role, Role::new("r1").with_name("Admin"));
}

#[tokio::test]
async fn test_update_missing_role() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .patch(&paths::role("missing"), &json!({ "name": "x" }))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_ROLE");
}

#[tokio::test]
async fn test_delete_role() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.delete(&paths::role("r2")).await.unwrap();
    assert!(response.headers().get(reqwest::header::CONTENT_TYPE).is_none());
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&paths::role("r2")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.delete(&paths::role("r2")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Member Tests
// ============================================================================

#[tokio::test]
async fn test_get_members() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get(&paths::members()).await.unwrap();
    let members: Vec<Member> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(members.len(), 2);

    let response = server.get(&paths::member("u1")).await.unwrap();
    let member: Member = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(member.nick.as_deref(), Some("one"));
    assert_eq!(member.roles, ["r1"]);

    let response = server.get(&paths::member("missing")).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_MEMBER");
}

#[tokio::test]
async fn test_create_member_counts() {
    let server = TestServer::start().await.expect("Failed to start server");

    let mut created = Vec::new();
    for _ in 0..3 {
        let response = server.post_empty(&paths::members()).await.unwrap();
        let member: Member = assert_json(response, StatusCode::OK).await.unwrap();

        assert_eq!(member.guild_id, GUILD_ID);
        assert!(member.joined_at.is_some());
        assert!(member.roles.is_empty());
        created.push(member);
    }

    let ids: HashSet<&str> = created.iter().map(|m| m.user_id.as_str()).collect();
    assert_eq!(ids.len(), 3);

    let response = server.get(&paths::guild()).await.unwrap();
    let guild: Guild = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(guild.member_count, 5);
    assert_eq!(guild.members.len(), 5);

    let response = server.get(&paths::member(&created[0].user_id)).await.unwrap();
    let fetched: Member = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched, created[0]);
}

#[tokio::test]
async fn test_update_member() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .patch(
            &paths::member("u1"),
            &json!({ "user_id": "u9", "guild_id": "g9", "nick": null, "mute": true }),
        )
        .await
        .unwrap();
    let member: Member = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(member.guild_id, GUILD_ID);
    assert_eq!(member.user_id, "u1");
    assert_eq!(member.nick, None);
    assert_eq!(member.mute, Some(true));
    assert_eq!(member.roles, ["r1"]);

    let response = server.get(&paths::member("u1")).await.unwrap();
    let stored: Member = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stored, member);
}

#[tokio::test]
async fn test_remove_member() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.delete(&paths::member("u2")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&paths::member("u2")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get(&paths::guild()).await.unwrap();
    let guild: Guild = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(guild.member_count, 1);

    let response = server.delete(&paths::member("u2")).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_MEMBER");
}

// ============================================================================
// Member Role Tests
// ============================================================================

#[tokio::test]
async fn test_assign_and_unassign_role() {
    let server = TestServer::start().await.expect("Failed to start server");

    // Assigning twice keeps both entries
    for _ in 0..2 {
        let response = server.put(&paths::member_role("u2", "r2")).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server.get(&paths::member_roles("u2")).await.unwrap();
    let roles: Vec<String> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(roles, ["r2", "r2"]);

    // Unassigning removes a single entry
    let response = server.delete(&paths::member_role("u2", "r2")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&paths::member_roles("u2")).await.unwrap();
    let roles: Vec<String> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(roles, ["r2"]);

    // Unassigning a role the member lacks is a no-op
    let response = server.delete(&paths::member_role("u2", "r1")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&paths::member_roles("u2")).await.unwrap();
    let roles: Vec<String> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(roles, ["r2"]);
}

#[tokio::test]
async fn test_assign_role_to_missing_member() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.put(&paths::member_role("missing", "r1")).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_MEMBER");
}

#[tokio::test]
async fn test_get_member_role() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get(&paths::member_role("u1", "r1")).await.unwrap();
    let role: Role = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(role, Role::new("r1").with_name("Admin"));

    // The member does not carry r2
    let response = server.get(&paths::member_role("u1", "r2")).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_ROLE");

    // Deleting the guild role hides it from the member view
    let response = server.delete(&paths::role("r1")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&paths::member_role("u1", "r1")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
