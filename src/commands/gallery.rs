use anyhow::Result;
use colored::Colorize;
use studiofolio::config::Config;
use studiofolio::gallery::{GalleryClient, PhotoResource};
use studiofolio::repository::{GalleryRepository, ViewState};

use crate::cli::GalleryCommands;

fn repository(cfg: &Config) -> Result<GalleryRepository> {
    let client = GalleryClient::from_config(&cfg.cloudinary)?;
    Ok(GalleryRepository::new(
        client,
        &cfg.cloudinary.featured_folder,
        cfg.fallback_videos.clone(),
    ))
}

/// Execute a gallery subcommand
pub async fn execute(action: &GalleryCommands, cfg: &Config) -> Result<()> {
    let repo = repository(cfg)?;

    match action {
        GalleryCommands::Albums => match ViewState::from_result(repo.albums().await) {
            ViewState::Ready(albums) => {
                for album in albums {
                    println!(
                        "{} ({} photos)",
                        album.display_name.bold(),
                        album.photo_count
                    );
                    if !album.cover_url.is_empty() {
                        println!("  {}: {}", "Cover".cyan(), album.cover_url);
                    }
                }
            }
            state => print_state(&state),
        },
        GalleryCommands::Photos { folder, full } => {
            let folder = folder
                .as_deref()
                .unwrap_or(repo.client().default_folder())
                .to_string();
            let state = ViewState::from_result(repo.photos(&folder).await);
            print_photos(&repo, state, *full);
        }
        GalleryCommands::Featured => {
            let state = ViewState::from_result(repo.featured_photos().await);
            print_photos(&repo, state, false);
        }
        GalleryCommands::Videos { folder } => {
            for video in repo.videos(folder).await {
                println!("{}", video.title.bold());
                println!("  {}: {}", "Video".cyan(), video.video_url);
                println!("  {}: {}", "Poster".cyan(), video.thumbnail_url);
            }
        }
    }

    Ok(())
}

fn print_photos(repo: &GalleryRepository, state: ViewState<Vec<PhotoResource>>, full: bool) {
    match state {
        ViewState::Ready(photos) => {
            let urls = repo.client().urls();
            for photo in photos {
                let url = if full {
                    urls.full_for(&photo)
                } else {
                    urls.thumbnail_for(&photo)
                };
                println!(
                    "{} {}x{} ({:.2}) {}",
                    photo.title().bold(),
                    photo.width,
                    photo.height,
                    photo.aspect_ratio(),
                    url
                );
            }
        }
        state => print_state(&state),
    }
}

fn print_state<T>(state: &ViewState<T>) {
    match state {
        ViewState::Loading => println!("{}", "Loading...".yellow()),
        ViewState::Empty => println!("{}", "Nothing here yet".dimmed()),
        ViewState::Failed(message) => println!("{} {}", "✗".red(), message),
        ViewState::Ready(_) => {}
    }
}
