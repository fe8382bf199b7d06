//! Streaming download of gene set catalogs

use std::io::Write;
use std::path::Path;

use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::error::{Error, Result};

/// Download `url` to `dest` with a progress bar.
///
/// The transfer streams through a `.part` file that is renamed into place
/// at the end, so an interrupted download never leaves a truncated catalog
/// at `dest`.
pub async fn download_gene_sets(url: &str, dest: &Path) -> Result<()> {
    info!(url, dest = %dest.display(), "downloading gene set catalog");

    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let client = reqwest::Client::new();
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(Error::download(format!(
            "{url}: HTTP {}",
            response.status()
        )));
    }

    let file_name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dest.display().to_string());

    let total_size = response.content_length().unwrap_or(0);
    let pb = ProgressBar::new(total_size);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message(format!("Downloading {file_name}"));

    let part = dest.with_extension("gmt.part");
    let mut file = std::fs::File::create(&part)?;
    let mut downloaded = 0u64;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk)?;
        downloaded += chunk.len() as u64;
        pb.set_position(downloaded);
    }

    file.flush()?;
    drop(file);
    std::fs::rename(&part, dest)?;

    pb.finish_with_message(format!("Downloaded {file_name}"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_download_writes_destination() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gene_sets.gmt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("SET\turl\tMEF2C\n"))
            .mount(&server)
            .await;

        let dir = tempdir().unwrap();
        let dest = dir.path().join("gene_sets.gmt");
        download_gene_sets(&format!("{}/gene_sets.gmt", server.uri()), &dest)
            .await
            .unwrap();

        let body = std::fs::read_to_string(&dest).unwrap();
        assert_eq!(body, "SET\turl\tMEF2C\n");
        assert!(!dir.path().join("gene_sets.gmt.part").exists());
    }

    #[tokio::test]
    async fn test_download_error_status_leaves_no_file() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let dir = tempdir().unwrap();
        let dest = dir.path().join("gene_sets.gmt");
        let result = download_gene_sets(&server.uri(), &dest).await;

        assert!(matches!(result, Err(Error::Download(_))));
        assert!(!dest.exists());
    }
}
