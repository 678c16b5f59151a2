use super::menu::IconName;
use freedesktop_icons::lookup;
use gdk_pixbuf::Pixbuf;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const LOOKUP_SIZE: u16 = 512;

pub fn find_icon_path(icon_name: &IconName) -> Option<PathBuf> {
    if icon_name.is_empty() {
        return None;
    }

    let path = Path::new(icon_name.as_str());
    if path.is_absolute() && path.exists() {
        return Some(path.to_path_buf());
    }

    lookup(icon_name.as_str())
        .with_size(LOOKUP_SIZE)
        .with_scale(1)
        .find()
}

/// Decoded icons keyed by name. Failed lookups are cached as `None`.
pub struct IconCache {
    size: i32,
    pixbufs: HashMap<IconName, Option<Pixbuf>>,
}

impl IconCache {
    pub fn new(size: i32) -> Self {
        Self {
            size,
            pixbufs: HashMap::new(),
        }
    }

    pub fn get(&mut self, name: &IconName) -> Option<&Pixbuf> {
        let size = self.size;
        self.pixbufs
            .entry(name.clone())
            .or_insert_with(|| Self::load(name, size))
            .as_ref()
    }

    fn load(name: &IconName, size: i32) -> Option<Pixbuf> {
        let path = find_icon_path(name)?;
        match Pixbuf::from_file_at_scale(&path, size, size, true) {
            Ok(pixbuf) => Some(pixbuf),
            Err(e) => {
                log::warn!("Failed to load icon {} from {}: {}", name, path.display(), e);
                None
            }
        }
    }
}
