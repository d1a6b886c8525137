use webclip_domain::video::VideoData;
use webclip_service::{
	CaptureRequest, CreateItemRequest, CreateScrapedDataRequest, Error, ItemFilter, LinkInput,
	ListRequest, ScrapedDataFilter, SearchRequest, UpdateItemRequest, UpdateRequest,
	UpdateScrapedDataRequest, WebclipService,
};
use webclip_storage::db::Db;
use webclip_testkit::TestDatabase;

const SKIP_NOTICE: &str = "Skipping service test; set WEBCLIP_PG_DSN to run.";

async fn test_env() -> Option<(TestDatabase, WebclipService)> {
	let base_dsn = match webclip_testkit::env_dsn() {
		Some(value) => value,
		None => {
			eprintln!("{SKIP_NOTICE}");

			return None;
		},
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let cfg = webclip_config::Postgres {
		dsn: test_db.dsn().to_string(),
		pool_max_conns: 5,
		pool_min_conns: 1,
		connect_timeout_secs: 10,
	};
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	Some((test_db, WebclipService::new(db)))
}

fn page_capture(url: &str, title: &str) -> CaptureRequest {
	CaptureRequest {
		url: url.to_string(),
		title: title.to_string(),
		content_type: "page".to_string(),
		..minimal_capture()
	}
}

fn minimal_capture() -> CaptureRequest {
	serde_json::from_str("{}").expect("Failed to build empty capture request.")
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set WEBCLIP_PG_DSN to run."]
async fn capture_round_trips_required_fields() {
	let Some((test_db, service)) = test_env().await else {
		return;
	};
	let mut req = page_capture("https://example.com/a", "A");

	req.content = "hello".to_string();
	req.tags = vec!["x".to_string(), "y".to_string()];

	let created = service.capture(req).await.expect("Failed to capture.");

	assert_eq!(created.url, "https://example.com/a");
	assert_eq!(created.title, "A");
	assert_eq!(created.content_type, "page");
	assert_eq!(created.content.as_deref(), Some("hello"));
	assert_eq!(created.tags, vec!["x".to_string(), "y".to_string()]);
	assert!(created.video_data.is_none());
	assert_eq!(created.updated_at, created.created_at);

	let fetched = service.get_memory(created.id).await.expect("Failed to fetch.");

	assert_eq!(fetched.url, created.url);
	assert_eq!(fetched.title, created.title);
	assert_eq!(fetched.tags, created.tags);
	assert!(fetched.video_data.is_none());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set WEBCLIP_PG_DSN to run."]
async fn capture_applies_defaults() {
	let Some((test_db, service)) = test_env().await else {
		return;
	};
	// No url, no title, no content_type: tolerance and defaulting kick in.
	let created = service.capture(minimal_capture()).await.expect("Failed to capture.");

	assert_eq!(created.url, "unknown");
	assert_eq!(created.title, "Untitled");
	assert_eq!(created.content_type, "page");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set WEBCLIP_PG_DSN to run."]
async fn capture_tolerates_browser_internal_urls() {
	let Some((test_db, service)) = test_env().await else {
		return;
	};
	let created = service
		.capture(page_capture("chrome://newtab/", "NT"))
		.await
		.expect("Failed to capture.");

	assert_eq!(created.url, "chrome://newtab/");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set WEBCLIP_PG_DSN to run."]
async fn capture_rejects_unknown_content_type() {
	let Some((test_db, service)) = test_env().await else {
		return;
	};
	let mut req = page_capture("https://example.com/", "X");

	req.content_type = "bookmark".to_string();

	assert!(matches!(service.capture(req).await, Err(Error::InvalidRequest { .. })));

	let listed = service.list(ListRequest::default()).await.expect("Failed to list.");

	assert_eq!(listed.count, 0);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set WEBCLIP_PG_DSN to run."]
async fn video_capture_round_trips_with_links() {
	let Some((test_db, service)) = test_env().await else {
		return;
	};
	let video = VideoData {
		platform: "youtube".to_string(),
		timestamp: 42,
		duration: 600,
		video_title: "T".to_string(),
		video_url: "https://youtube.com/watch?v=abc".to_string(),
		thumbnail_url: "https://img.example.com/abc.jpg".to_string(),
		formatted_timestamp: "00:42".to_string(),
	};
	let mut req = page_capture("https://youtube.com/watch?v=abc", "T");

	req.content_type = "video_timestamp".to_string();
	req.video_data = Some(video.clone());
	req.links = vec![LinkInput {
		text: "src".to_string(),
		href: "https://youtube.com/src".to_string(),
		title: "s".to_string(),
	}];

	let created = service.capture(req).await.expect("Failed to capture.");
	let fetched = service.get_memory(created.id).await.expect("Failed to fetch.");

	assert_eq!(fetched.video_data, Some(video));

	let links = fetched.links.expect("Point lookups attach links.");

	assert_eq!(links.len(), 1);
	assert_eq!(links[0].href, "https://youtube.com/src");
	assert_eq!(links[0].text.as_deref(), Some("src"));
	assert_eq!(links[0].title.as_deref(), Some("s"));

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set WEBCLIP_PG_DSN to run."]
async fn list_filters_and_paginates_newest_first() {
	let Some((test_db, service)) = test_env().await else {
		return;
	};

	for idx in 0..3 {
		let mut req = page_capture("https://example.com/page", &format!("page-{idx}"));

		req.content_type = "page".to_string();

		service.capture(req).await.expect("Failed to capture.");
	}
	for idx in 0..2 {
		let mut req = page_capture("https://example.com/sel", &format!("sel-{idx}"));

		req.content_type = "selection".to_string();
		req.selected_text = "snippet".to_string();

		service.capture(req).await.expect("Failed to capture.");
	}

	let first = service
		.list(ListRequest {
			content_type: Some("selection".to_string()),
			limit: Some(1),
			offset: Some(0),
			..Default::default()
		})
		.await
		.expect("Failed to list.");

	assert_eq!(first.count, 1);
	assert_eq!(first.limit, 1);
	assert_eq!(first.offset, 0);
	assert_eq!(first.memories[0].title, "sel-1");

	let second = service
		.list(ListRequest {
			content_type: Some("selection".to_string()),
			limit: Some(1),
			offset: Some(1),
			..Default::default()
		})
		.await
		.expect("Failed to list.");

	assert_eq!(second.count, 1);
	assert_eq!(second.memories[0].title, "sel-0");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set WEBCLIP_PG_DSN to run."]
async fn list_clamps_limit_and_offset() {
	let Some((test_db, service)) = test_env().await else {
		return;
	};
	let response = service
		.list(ListRequest { limit: Some(5_000), offset: Some(-9), ..Default::default() })
		.await
		.expect("Failed to list.");

	assert_eq!(response.limit, 100);
	assert_eq!(response.offset, 0);

	let response = service
		.list(ListRequest { limit: Some(-1), ..Default::default() })
		.await
		.expect("Failed to list.");

	assert_eq!(response.limit, 1);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set WEBCLIP_PG_DSN to run."]
async fn full_text_search_matches_content() {
	let Some((test_db, service)) = test_env().await else {
		return;
	};
	let mut req = page_capture("https://example.com/fox", "Fox");

	req.content = "the quick brown fox".to_string();

	service.capture(req).await.expect("Failed to capture.");

	let hits = service
		.search(SearchRequest { query: "quick fox".to_string(), ..Default::default() })
		.await
		.expect("Failed to search.");

	assert_eq!(hits.count, 1);
	assert_eq!(hits.memories[0].title, "Fox");

	let misses = service
		.search(SearchRequest { query: "giraffe".to_string(), ..Default::default() })
		.await
		.expect("Failed to search.");

	assert_eq!(misses.count, 0);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set WEBCLIP_PG_DSN to run."]
async fn search_combines_type_and_tag_filters() {
	let Some((test_db, service)) = test_env().await else {
		return;
	};
	let mut tagged = page_capture("https://example.com/1", "tagged");

	tagged.content = "shared words here".to_string();
	tagged.tags = vec!["rust".to_string()];

	let mut untagged = page_capture("https://example.com/2", "untagged");

	untagged.content = "shared words here".to_string();

	service.capture(tagged).await.expect("Failed to capture.");
	service.capture(untagged).await.expect("Failed to capture.");

	let hits = service
		.search(SearchRequest {
			query: "shared words".to_string(),
			tags: vec!["rust".to_string()],
			..Default::default()
		})
		.await
		.expect("Failed to search.");

	assert_eq!(hits.count, 1);
	assert_eq!(hits.memories[0].title, "tagged");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set WEBCLIP_PG_DSN to run."]
async fn partial_update_moves_updated_at_only() {
	let Some((test_db, service)) = test_env().await else {
		return;
	};
	let mut req = page_capture("https://example.com/u", "old");

	req.notes = "keep me".to_string();
	req.tags = vec!["before".to_string()];

	let created = service.capture(req).await.expect("Failed to capture.");
	let updated = service
		.update_memory(
			created.id,
			UpdateRequest {
				title: "new".to_string(),
				tags: vec!["a".to_string()],
				..Default::default()
			},
		)
		.await
		.expect("Failed to update.");

	assert_eq!(updated.title, "new");
	assert_eq!(updated.tags, vec!["a".to_string()]);
	assert_eq!(updated.notes.as_deref(), Some("keep me"));
	assert_eq!(updated.url, created.url);
	assert!(updated.updated_at > updated.created_at);

	// An empty patch still refreshes updated_at.
	let touched = service
		.update_memory(created.id, UpdateRequest::default())
		.await
		.expect("Failed to update.");

	assert_eq!(touched.title, "new");
	assert!(touched.updated_at > updated.updated_at);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set WEBCLIP_PG_DSN to run."]
async fn delete_cascades_and_repeats_as_not_found() {
	let Some((test_db, service)) = test_env().await else {
		return;
	};
	let mut req = page_capture("https://example.com/d", "D");

	req.links = vec![
		LinkInput {
			text: String::new(),
			href: "https://example.com/l1".to_string(),
			title: String::new(),
		},
		LinkInput {
			text: String::new(),
			href: "https://example.com/l2".to_string(),
			title: String::new(),
		},
	];

	let created = service.capture(req).await.expect("Failed to capture.");

	service.delete_memory(created.id).await.expect("Failed to delete.");

	let link_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links WHERE memory_id = $1")
		.bind(created.id)
		.fetch_one(&service.db.pool)
		.await
		.expect("Failed to count links.");

	assert_eq!(link_count, 0);
	assert!(matches!(service.get_memory(created.id).await, Err(Error::NotFound { .. })));
	assert!(matches!(service.delete_memory(created.id).await, Err(Error::NotFound { .. })));

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set WEBCLIP_PG_DSN to run."]
async fn stats_count_by_type_platform_and_recency() {
	let Some((test_db, service)) = test_env().await else {
		return;
	};

	service
		.capture(page_capture("https://example.com/1", "one"))
		.await
		.expect("Failed to capture.");
	service
		.capture(page_capture("https://example.com/2", "two"))
		.await
		.expect("Failed to capture.");

	let mut video = page_capture("https://youtube.com/watch?v=x", "vid");

	video.content_type = "video_timestamp".to_string();
	video.video_data = Some(VideoData {
		platform: "youtube".to_string(),
		timestamp: 10,
		duration: 100,
		video_title: String::new(),
		video_url: String::new(),
		thumbnail_url: String::new(),
		formatted_timestamp: String::new(),
	});

	service.capture(video).await.expect("Failed to capture.");

	let stats = service.stats().await.expect("Failed to fetch stats.");

	assert_eq!(stats.total_memories, 3);
	assert_eq!(stats.by_content_type.get("page"), Some(&2));
	assert_eq!(stats.by_content_type.get("video_timestamp"), Some(&1));
	assert_eq!(stats.by_platform.get("youtube"), Some(&1));
	assert_eq!(stats.recent_count, 3);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set WEBCLIP_PG_DSN to run."]
async fn stats_groupings_are_empty_without_rows() {
	let Some((test_db, service)) = test_env().await else {
		return;
	};
	let stats = service.stats().await.expect("Failed to fetch stats.");

	assert_eq!(stats.total_memories, 0);
	assert!(stats.by_content_type.is_empty());
	assert!(stats.by_platform.is_empty());
	assert_eq!(stats.recent_count, 0);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set WEBCLIP_PG_DSN to run."]
async fn items_crud_round_trip() {
	let Some((test_db, service)) = test_env().await else {
		return;
	};
	let created = service
		.create_item(CreateItemRequest {
			title: "write report".to_string(),
			description: "quarterly".to_string(),
			status: "pending".to_string(),
			priority: "high".to_string(),
		})
		.await
		.expect("Failed to create item.");

	assert!(matches!(
		service
			.create_item(CreateItemRequest {
				title: String::new(),
				description: String::new(),
				status: "pending".to_string(),
				priority: "low".to_string(),
			})
			.await,
		Err(Error::InvalidRequest { .. })
	));

	let listed = service
		.list_items(ItemFilter { status: Some("pending".to_string()), priority: None })
		.await
		.expect("Failed to list items.");

	assert_eq!(listed.len(), 1);

	let updated = service
		.update_item(
			created.id,
			UpdateItemRequest { status: "completed".to_string(), ..Default::default() },
		)
		.await
		.expect("Failed to update item.");

	assert_eq!(updated.status, "completed");
	assert_eq!(updated.title, "write report");
	assert!(updated.updated_at > updated.created_at);

	service.delete_item(created.id).await.expect("Failed to delete item.");

	assert!(matches!(service.get_item(created.id).await, Err(Error::NotFound { .. })));

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set WEBCLIP_PG_DSN to run."]
async fn scraped_data_is_scoped_per_user() {
	let Some((test_db, service)) = test_env().await else {
		return;
	};
	let created = service
		.create_scraped(
			"user-a",
			CreateScrapedDataRequest {
				url: "https://example.com/scraped".to_string(),
				title: "scraped".to_string(),
				content: "body".to_string(),
				metadata: serde_json::Map::new(),
				tags: vec!["a".to_string(), "b".to_string()],
			},
		)
		.await
		.expect("Failed to create scraped data.");

	assert_eq!(created.tags, "a,b");

	// Another user sees neither the row nor any effect from mutations.
	assert!(matches!(
		service.get_scraped("user-b", created.id).await,
		Err(Error::NotFound { .. })
	));
	assert!(matches!(
		service.delete_scraped("user-b", created.id).await,
		Err(Error::NotFound { .. })
	));

	let listed = service
		.list_scraped("user-a", ScrapedDataFilter::default())
		.await
		.expect("Failed to list scraped data.");

	assert_eq!(listed.data.len(), 1);
	assert_eq!(listed.page, 1);
	assert_eq!(listed.limit, 50);

	service
		.update_scraped(
			"user-a",
			created.id,
			UpdateScrapedDataRequest { title: "renamed".to_string(), ..Default::default() },
		)
		.await
		.expect("Failed to update scraped data.");

	let fetched =
		service.get_scraped("user-a", created.id).await.expect("Failed to fetch scraped data.");

	assert_eq!(fetched.title, "renamed");

	assert!(matches!(
		service.update_scraped("user-a", created.id, UpdateScrapedDataRequest::default()).await,
		Err(Error::InvalidRequest { .. })
	));

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
