//! End-to-end runs of the scan, extract, download and aggregate pipeline.

use linkfetch::{AggregateStats, Error, PipelineBuilder};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use wiremock::MockServer;

mod common;
use common::helpers::*;

#[tokio::test]
async fn test_markdown_link_saved_beside_source() {
    let server = MockServer::start().await;
    mount_file(&server, "/file1.zip", b"zip bytes", 1).await;
    let dir = create_temp_dir();
    let md = format!("[x]({})", test_url(&server, "/file1.zip"));
    create_temp_file(dir.path(), "a.md", md.as_bytes());

    let pipeline = PipelineBuilder::new()
        .workers(1)
        .downloader(create_test_downloader(&server))
        .build()
        .unwrap();
    let stats = pipeline.run(&[dir.path().to_path_buf()]).await.unwrap();

    assert_eq!(
        stats,
        AggregateStats {
            files_scanned: 1,
            urls_found: 1,
            downloads_succeeded: 1,
            downloads_skipped: 0,
            downloads_failed: 0,
        }
    );
    assert_file_contents(&dir.path().join("file1.zip"), b"zip bytes");
}

#[tokio::test]
async fn test_recursive_run_counts_every_outcome() {
    let server = MockServer::start().await;
    mount_file(&server, "/root.csv", b"root", 1).await;
    mount_file(&server, "/s1/good.pdf", b"good", 1).await;
    mount_status(&server, "/s1/gone.pdf", 404).await;
    mount_file(&server, "/s2/have.zip", b"new", 0).await;

    let dir = create_temp_dir();
    create_temp_file(
        dir.path(),
        "list.txt",
        format!("{}\n", test_url(&server, "/root.csv")).as_bytes(),
    );
    create_temp_file(
        dir.path(),
        "s1/links.md",
        format!(
            "[good]({}) and [gone]({}) and https://example.com/ignored.zip",
            test_url(&server, "/s1/good.pdf"),
            test_url(&server, "/s1/gone.pdf")
        )
        .as_bytes(),
    );
    create_temp_file(
        dir.path(),
        "s2/have.url",
        format!("[InternetShortcut]\nURL={}\n", test_url(&server, "/s2/have.zip")).as_bytes(),
    );
    create_temp_file(dir.path(), "s2/have.zip", b"old");
    create_temp_file(dir.path(), "s2/notes.txt", b"nothing to see here");
    create_temp_file(dir.path(), "s2/photo.png", b"\x89PNG");

    let subdirs = Arc::new(AtomicUsize::new(0));
    let counter = subdirs.clone();
    let pipeline = PipelineBuilder::new()
        .workers(3)
        .recursive(true)
        .downloader(create_test_downloader(&server))
        .on_progress(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .build()
        .unwrap();
    let stats = pipeline.run(&[dir.path().to_path_buf()]).await.unwrap();

    assert_eq!(stats.files_scanned, 4);
    assert_eq!(stats.urls_found, 4);
    assert_eq!(stats.downloads_succeeded, 2);
    assert_eq!(stats.downloads_skipped, 1);
    assert_eq!(stats.downloads_failed, 1);
    assert_eq!(subdirs.load(Ordering::SeqCst), 2);

    assert_file_contents(&dir.path().join("root.csv"), b"root");
    assert_file_contents(&dir.path().join("s1/good.pdf"), b"good");
    assert_file_missing(&dir.path().join("s1/gone.pdf"));
    assert_file_contents(&dir.path().join("s2/have.zip"), b"old");
}

#[tokio::test]
async fn test_second_run_skips_everything() {
    let server = MockServer::start().await;
    mount_file(&server, "/a.bin", b"a", 1).await;
    mount_file(&server, "/b.bin", b"b", 1).await;
    let dir = create_temp_dir();
    create_temp_file(
        dir.path(),
        "links.txt",
        format!("{} {}", test_url(&server, "/a.bin"), test_url(&server, "/b.bin")).as_bytes(),
    );

    let pipeline = PipelineBuilder::new()
        .workers(2)
        .downloader(create_test_downloader(&server))
        .build()
        .unwrap();
    let roots = [dir.path().to_path_buf()];

    let first = pipeline.run(&roots).await.unwrap();
    assert_eq!(first.downloads_succeeded, 2);

    let second = pipeline.run(&roots).await.unwrap();
    assert_eq!(second.downloads_succeeded, 0);
    assert_eq!(second.downloads_skipped, 2);
    assert_eq!(second.downloads_attempted(), 2);
}

#[tokio::test]
async fn test_many_files_through_small_queues() {
    let server = MockServer::start().await;
    let dir = create_temp_dir();
    for i in 0..30 {
        let route = format!("/f{i}.dat");
        mount_file(&server, &route, b"x", 1).await;
        create_temp_file(
            dir.path(),
            &format!("d{}/l{i}.txt", i % 4),
            test_url(&server, &route).as_bytes(),
        );
    }

    let pipeline = PipelineBuilder::new()
        .workers(4)
        .recursive(true)
        .queue_capacity(2)
        .downloader(create_test_downloader(&server))
        .build()
        .unwrap();
    let stats = pipeline.run(&[dir.path().to_path_buf()]).await.unwrap();

    assert_eq!(stats.files_scanned, 30);
    assert_eq!(stats.downloads_succeeded, 30);
}

#[tokio::test]
async fn test_fatal_configuration_errors() {
    assert!(matches!(
        PipelineBuilder::new().workers(0).build(),
        Err(Error::NoWorkers)
    ));

    let dir = create_temp_dir();
    let file = create_temp_file(dir.path(), "a.md", b"");
    let pipeline = PipelineBuilder::new().workers(1).build().unwrap();

    let err = pipeline.run(&[file]).await.unwrap_err();
    assert!(matches!(err, Error::NotADirectory(_)));
    assert!(err.is_fatal_config());

    let err = pipeline
        .run(&[dir.path().to_path_buf(), dir.path().join("missing")])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingRoot(_)));
}
