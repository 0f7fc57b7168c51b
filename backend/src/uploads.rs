//! Shared multipart handling for admin image uploads.
//!
//! News and partner forms post a `json` part describing the entity and
//! an optional `image` part. Images land in the uploads directory under
//! their md5 digest, which both de-duplicates re-uploads and gives
//! stable cache-friendly URLs.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use actix_multipart::Multipart;
use futures_util::StreamExt;

use crate::config::Config;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "svg"];

pub struct UploadedEntity<T> {
    pub entity: T,
    /// Served path (`/uploads/<digest>.<ext>`) when an image part was
    /// present.
    pub image: Option<String>,
}

pub async fn read_entity_with_image<T: serde::de::DeserializeOwned>(
    mut payload: Multipart,
    cfg: &Config,
) -> Result<UploadedEntity<T>, Box<dyn std::error::Error>> {
    let mut entity: Option<T> = None;
    let mut image: Option<String> = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        match name.as_deref() {
            Some("json") => {
                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    bytes.extend_from_slice(&chunk?);
                }
                entity = Some(serde_json::from_slice(&bytes)?);
            }
            Some("image") => {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
                    .unwrap_or_default();
                let ext = Path::new(&filename)
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or_default()
                    .to_lowercase();
                if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
                    return Err("unsupported image type".into());
                }

                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    bytes.extend_from_slice(&chunk?);
                }
                let file_name = format!("{:x}.{ext}", md5::compute(&bytes));
                let disk_path = Path::new(&cfg.uploads_dir).join(&file_name);
                File::create(&disk_path)?.write_all(&bytes)?;
                image = Some(format!("/uploads/{file_name}"));
            }
            _ => {}
        }
    }

    let entity = entity.ok_or("missing json part")?;
    Ok(UploadedEntity { entity, image })
}
