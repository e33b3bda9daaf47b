use dioxus::prelude::*;
use dioxus_logger::tracing;
use hotelfix::model::ticket::ImageUpload;

/// Read the files picked in an `<input type="file">` into uploadable images
pub async fn read_images(evt: FormEvent) -> Vec<ImageUpload> {
    let mut images = Vec::new();

    for file in evt.files() {
        let file_name = file.name();

        match file.read_bytes().await {
            Ok(bytes) => images.push(ImageUpload {
                content_type: file
                    .content_type()
                    .unwrap_or_else(|| content_type_for(&file_name).to_string()),
                file_name,
                bytes: bytes.to_vec(),
            }),
            Err(e) => tracing::warn!(file = %file_name, "Failed to read picked file: {}", e),
        }
    }

    images
}

fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}
