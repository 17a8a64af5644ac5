use anyhow::Result;
use http::StatusCode;
use pterodactyl_sdk::{
    Client, CreateAllocations, CreateUser, Error, UpdateServerBuild, UserFilter, UserInclude,
    UserSort,
};
use serde_json::json;
use wiremock::{
    Match, Mock, MockServer, Request, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

/// Matches only requests whose URL carries no query string at all.
#[derive(Clone, Copy)]
struct EmptyQuery;

impl Match for EmptyQuery {
    fn matches(&self, request: &Request) -> bool {
        request.url.query().is_none_or(str::is_empty)
    }
}

fn empty_user_list() -> serde_json::Value {
    json!({
        "object": "list",
        "data": [],
        "meta": {
            "pagination": {
                "total": 0,
                "count": 0,
                "per_page": 50,
                "current_page": 1,
                "total_pages": 1,
                "links": {}
            }
        }
    })
}

fn user_item(username: &str, email: &str) -> serde_json::Value {
    json!({
        "object": "user",
        "attributes": {
            "id": 2,
            "external_id": null,
            "uuid": "a5a045e2-e7c9-4e92-b744-4e1bcd936ad9",
            "username": username,
            "email": email,
            "first_name": "Bob",
            "last_name": "Example",
            "language": "en",
            "root_admin": false,
            "2fa": false,
            "created_at": "2024-03-18T15:15:17+00:00",
            "updated_at": "2024-03-18T15:15:17+00:00"
        }
    })
}

fn client(server: &MockServer) -> Result<Client> {
    Ok(Client::builder(server.uri(), "ptla_test_key")?
        .user_agent("pterodactyl-sdk-tests")
        .build()?)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn list_without_options_sends_empty_query() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/application/users"))
        .and(EmptyQuery)
        .and(header("Authorization", "Bearer ptla_test_key"))
        .and(header("Accept", "application/json"))
        .and(header("User-Agent", "pterodactyl-sdk-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_user_list()))
        .expect(1)
        .mount(&server)
        .await;

    let users = client(&server)?.users().list(None, None, None).await?;
    assert_eq!(users.meta.pagination.total, 0);
    assert!(users.data.is_empty());

    server.verify().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn list_with_include_filter_and_sort_builds_query() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/application/users"))
        .and(query_param("include", "servers"))
        .and(query_param("filter[username]", "bob"))
        .and(query_param("sort", "uuid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_user_list()))
        .expect(1)
        .mount(&server)
        .await;

    let filter = UserFilter {
        username: Some("bob".into()),
        ..Default::default()
    };
    client(&server)?
        .users()
        .list(Some(UserInclude::Servers), Some(&filter), Some(UserSort::Uuid))
        .await?;

    server.verify().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn trailing_slash_in_base_url_is_normalized() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/application/locations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [],
            "meta": {
                "pagination": {
                    "total": 0, "count": 0, "per_page": 50,
                    "current_page": 1, "total_pages": 1, "links": {}
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/", server.uri());
    let client = Client::new(base, "ptla_test_key")?;
    client.locations().list(None).await?;

    server.verify().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn create_user_round_trips_submitted_fields() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/application/users"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "email": "bob@example.com",
            "username": "bob",
            "first_name": "Bob",
            "last_name": "Example"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(user_item("bob", "bob@example.com")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let payload = CreateUser {
        email: "bob@example.com".into(),
        username: "bob".into(),
        first_name: "Bob".into(),
        last_name: "Example".into(),
        external_id: None,
        password: None,
        root_admin: None,
        language: None,
    };
    let created = client(&server)?.users().create(&payload).await?;

    assert_eq!(created.object, "user");
    assert_eq!(created.attributes.username, payload.username);
    assert_eq!(created.attributes.email, payload.email);
    assert_eq!(created.attributes.first_name, payload.first_name);

    server.verify().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn get_user_by_external_id_hits_external_path() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/application/users/external/remote-17"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(user_item("bob", "bob@example.com")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let user = client(&server)?
        .users()
        .get_by_external_id("remote-17", None)
        .await?;
    assert_eq!(user.attributes.username, "bob");

    server.verify().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn delete_handles_204_without_parsing_body() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/application/users/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)?.users().delete(9).await?;

    server.verify().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn non_success_status_carries_code_and_body() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/application/servers/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)?
        .servers()
        .get(404, None)
        .await
        .expect_err("expected HTTP error");

    match err {
        Error::Http { status, ref body, .. } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, "Not Found");
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
    assert!(err.is_not_found());

    server.verify().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn node_configuration_is_not_enveloped() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/application/nodes/3/configuration"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "debug": false,
            "uuid": "1046d1d1-b8ef-4771-82b1-2b5946d33397",
            "token_id": "iAcosCn1KCAgVjVO",
            "token": "FanPzLCptUxkGow3vi7Z",
            "api": {
                "host": "0.0.0.0",
                "port": 8080,
                "ssl": {
                    "enabled": true,
                    "cert": "/etc/letsencrypt/live/node.example.com/fullchain.pem",
                    "key": "/etc/letsencrypt/live/node.example.com/privkey.pem"
                },
                "upload_limit": 100
            },
            "system": {
                "data": "/srv/daemon-data",
                "sftp": { "bind_port": 2022 }
            },
            "remote": "https://panel.example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = client(&server)?.nodes().configuration(3).await?;
    assert_eq!(config.api.port, 8080);
    assert!(config.api.ssl.enabled);
    assert_eq!(config.system.sftp.bind_port, 2022);

    server.verify().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn update_server_build_patches_build_section() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/application/servers/12/build"))
        .and(body_json(json!({ "allocation": 4, "oom_disabled": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "server",
            "attributes": {
                "id": 12,
                "external_id": null,
                "uuid": "d557c19c-8b21-4456-a9e5-181beda429f4",
                "identifier": "d557c19c",
                "name": "craft",
                "description": null,
                "suspended": false,
                "limits": {
                    "memory": 1024, "swap": 0, "disk": 10000,
                    "io": 500, "cpu": 0, "threads": null
                },
                "feature_limits": { "databases": 2, "allocations": 2, "backups": 1 },
                "user": 1,
                "node": 3,
                "allocation": 4,
                "nest": 1,
                "egg": 5,
                "pack": null,
                "container": {
                    "startup_command": "java -jar server.jar",
                    "image": "quay.io/pterodactyl/core:java",
                    "installed": true,
                    "environment": {}
                },
                "created_at": "2024-02-10T16:34:00+00:00",
                "updated_at": "2024-06-10T16:34:00+00:00"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = UpdateServerBuild {
        allocation: Some(4),
        oom_disabled: Some(true),
        ..Default::default()
    };
    let updated = client(&server)?.servers().update_build(12, &payload).await?;
    assert_eq!(updated.attributes.allocation, 4);
    assert_eq!(updated.attributes.limits.memory, 1024);

    server.verify().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn allocation_operations_are_scoped_under_the_node() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/application/nodes/5/allocations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [{
                "object": "allocation",
                "attributes": {
                    "id": 1,
                    "ip": "203.0.113.1",
                    "alias": null,
                    "port": 25565,
                    "notes": null,
                    "assigned": false
                }
            }],
            "meta": {
                "pagination": {
                    "total": 1, "count": 1, "per_page": 50,
                    "current_page": 1, "total_pages": 1, "links": {}
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/application/nodes/5/allocations"))
        .and(body_json(json!({
            "ip": "203.0.113.1",
            "ports": ["25565", "25570-25580"]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/application/nodes/5/allocations/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server)?;
    let allocations = client.allocations();

    let listed = allocations.list(5, None).await?;
    assert_eq!(listed.data[0].attributes.port, 25565);
    assert!(!listed.data[0].attributes.assigned);

    allocations
        .create(
            5,
            &CreateAllocations {
                ip: "203.0.113.1".into(),
                ports: vec!["25565".into(), "25570-25580".into()],
            },
        )
        .await?;

    allocations.delete(5, 1).await?;

    server.verify().await;
    Ok(())
}
