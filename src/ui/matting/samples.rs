// SPDX-License-Identifier: MPL-2.0
//! Predefined sample photographs the user can try without uploading.
//!
//! The list is static configuration data; thumbnails are fetched once at
//! startup and a failed fetch degrades to an alt-text button.

use iced::widget::image;

/// A selectable example photograph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleImage {
    pub url: &'static str,
    pub alt: &'static str,
}

/// The selectable sample photographs, Unsplash-hosted.
pub static SAMPLE_IMAGES: [SampleImage; 5] = [
    SampleImage {
        url: "https://images.unsplash.com/photo-1632765854612-9b02b6ec2b15?ixlib=rb-4.0.3&q=85&fm=jpg&crop=entropy&cs=srgb&dl=good-faces-xmSWVeGEnJw-unsplash.jpg&w=1920",
        alt: "a woman with an afro is looking at the camera by Good Faces",
    },
    SampleImage {
        url: "https://images.unsplash.com/photo-1515886657613-9f3515b0c78f?ixlib=rb-4.0.3&q=85&fm=jpg&crop=entropy&cs=srgb&dl=dom-hill-nimElTcTNyY-unsplash.jpg&w=1920",
        alt: "woman in yellow tracksuit standing on basketball court side by Dom Hill",
    },
    SampleImage {
        url: "https://images.unsplash.com/photo-1628035514544-ebd32b766089?ixlib=rb-4.0.3&q=85&fm=jpg&crop=entropy&cs=srgb&dl=kristian-angelo-KW-jwdSgOw4-unsplash.jpg&w=1920",
        alt: "man in black leather jacket riding black motorcycle by Kristian Angelo",
    },
    SampleImage {
        url: "https://images.unsplash.com/photo-1587300003388-59208cc962cb?ixlib=rb-4.0.3&q=85&fm=jpg&crop=entropy&cs=srgb&dl=pauline-loroy-U3aF7hgUSrk-unsplash.jpg&w=1920",
        alt: "white and brown long coat large dog by Pauline Loroy",
    },
    SampleImage {
        url: "https://images.unsplash.com/photo-1540492649367-c8565a571e4b?ixlib=rb-4.0.3&q=85&fm=jpg&crop=entropy&cs=srgb&dl=andreas-m-p40QuGwGCcw-unsplash.jpg&w=1920",
        alt: "green plant on yellow ceramic pot by Andreas M",
    },
];

/// Thumbnail handles fetched for the sample strip, indexed like
/// [`SAMPLE_IMAGES`].
#[derive(Debug, Clone)]
pub struct Thumbnails {
    handles: Vec<Option<image::Handle>>,
}

impl Default for Thumbnails {
    fn default() -> Self {
        Self {
            handles: vec![None; SAMPLE_IMAGES.len()],
        }
    }
}

impl Thumbnails {
    /// Stores a fetched thumbnail. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, handle: image::Handle) {
        if let Some(slot) = self.handles.get_mut(index) {
            *slot = Some(handle);
        }
    }

    /// Returns the thumbnail for a sample, when fetched.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&image::Handle> {
        self.handles.get(index).and_then(|slot| slot.as_ref())
    }
}
