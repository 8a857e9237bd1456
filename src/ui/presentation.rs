//! Renders the registry into the ViewState list.
//!
//! Rows are rebuilt from a registry snapshot after every mutation; the view
//! keeps its own copy of each thumbnail, so a preview released afterwards is
//! never read by a stale frame.

use crate::file_utils::format_size;
use crate::image_loader::{self, Thumbnail};
use crate::services::upload_service::upload_label;
use crate::state::registry::FileRecord;
use crate::state::{FileId, FileRegistry};
use crate::ui::state_helpers::set_file_list;
use slint::{ComponentHandle, Model};
use std::collections::HashSet;

/// Display data for one registry record.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRowData {
    pub id: FileId,
    pub name: String,
    pub size: String,
    pub mime_type: String,
    pub thumbnail: Option<Thumbnail>,
}

/// Summary line data shown above and below the list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSummary {
    pub count: usize,
    pub total_size: String,
    pub upload_label: String,
}

fn build_row(registry: &FileRegistry, record: &FileRecord) -> FileRowData {
    FileRowData {
        id: record.id,
        name: record.file.name.clone(),
        size: format_size(record.file.size),
        mime_type: record.file.mime_type.clone(),
        thumbnail: registry.thumbnail(record),
    }
}

pub fn build_rows(registry: &FileRegistry) -> Vec<FileRowData> {
    registry
        .records()
        .iter()
        .map(|record| build_row(registry, record))
        .collect()
}

/// Rebuilds only the rows whose preview key is in `keys`, with their list index.
/// Keys of records already removed are ignored.
pub fn preview_rows(registry: &FileRegistry, keys: &[u64]) -> Vec<(usize, FileRowData)> {
    let keys: HashSet<u64> = keys.iter().copied().collect();
    registry
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            record
                .preview()
                .is_some_and(|handle| keys.contains(&handle.key()))
        })
        .map(|(index, record)| (index, build_row(registry, record)))
        .collect()
}

pub fn summarize(registry: &FileRegistry) -> ListSummary {
    ListSummary {
        count: registry.len(),
        total_size: format_size(registry.total_size()),
        upload_label: upload_label(registry.len()),
    }
}

impl From<FileRowData> for crate::FileRow {
    fn from(row: FileRowData) -> Self {
        let preview = row
            .thumbnail
            .as_ref()
            .map(image_loader::create_slint_image)
            .unwrap_or_default();

        crate::FileRow {
            id: row.id.to_string().into(),
            name: row.name.into(),
            size: row.size.into(),
            mime_type: row.mime_type.into(),
            has_preview: row.thumbnail.is_some(),
            preview,
        }
    }
}

/// Redraws the file list from the current registry contents.
pub fn refresh(ui: &crate::AppWindow, registry: &FileRegistry) {
    let rows: Vec<crate::FileRow> = build_rows(registry)
        .into_iter()
        .map(crate::FileRow::from)
        .collect();
    set_file_list(ui, rows, &summarize(registry));
}

/// Swaps in the rows of freshly decoded thumbnails, leaving the rest untouched.
///
/// Model rows mirror registry order: every registry mutation is followed by a
/// full [`refresh`] before control returns to the event loop.
pub fn update_preview_rows(ui: &crate::AppWindow, registry: &FileRegistry, keys: &[u64]) {
    let model = ui.global::<crate::ViewState>().get_files();
    for (index, row) in preview_rows(registry, keys) {
        if index < model.row_count() {
            model.set_row_data(index, row.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::registry::test_support::{pdf, png, registry};

    #[test]
    fn rows_follow_registry_order() {
        let (mut registry, _) = registry();
        let records = vec![
            registry.new_record(pdf("b.pdf")),
            registry.new_record(png("a.png")),
        ];
        registry.append(records);

        let rows = build_rows(&registry);
        let names: Vec<_> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, ["b.pdf", "a.png"]);
        assert_eq!(rows[0].size, "512 Bytes");
        assert_eq!(rows[1].size, "2 KB");
        assert_eq!(rows[0].mime_type, "application/pdf");
    }

    #[test]
    fn only_image_rows_have_thumbnails() {
        let (mut registry, _) = registry();
        let records = vec![
            registry.new_record(png("a.png")),
            registry.new_record(pdf("b.pdf")),
        ];
        registry.append(records);

        let rows = build_rows(&registry);
        assert!(rows[0].thumbnail.is_some());
        assert!(rows[1].thumbnail.is_none());
    }

    #[test]
    fn settled_preview_reads_only_its_own_thumbnail() {
        let (mut registry, previews) = registry();
        let records: Vec<_> = (0..500)
            .map(|i| registry.new_record(png(&format!("{i}.png"))))
            .collect();
        registry.append(records);
        let key = registry.records()[250].preview().unwrap().key();

        let rows = preview_rows(&registry, &[key]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, 250);
        assert_eq!(rows[0].1.name, "250.png");
        assert_eq!(previews.thumbnail_reads(), vec![key]);
    }

    #[test]
    fn coalesced_keys_update_each_row_once() {
        let (mut registry, previews) = registry();
        let records = vec![
            registry.new_record(png("a.png")),
            registry.new_record(pdf("b.pdf")),
            registry.new_record(png("c.png")),
        ];
        registry.append(records);
        let keys: Vec<u64> = registry
            .records()
            .iter()
            .filter_map(|record| record.preview().map(|handle| handle.key()))
            .collect();

        let rows = preview_rows(&registry, &[keys[1], keys[0], keys[1]]);

        let indexes: Vec<_> = rows.iter().map(|(index, _)| *index).collect();
        assert_eq!(indexes, [0, 2]);
        assert_eq!(previews.thumbnail_reads().len(), 2);
    }

    #[test]
    fn removed_record_key_is_ignored() {
        let (mut registry, previews) = registry();
        let records = vec![registry.new_record(png("a.png"))];
        registry.append(records);
        let id = registry.records()[0].id;
        let key = registry.records()[0].preview().unwrap().key();
        registry.remove(id);

        assert!(preview_rows(&registry, &[key]).is_empty());
        assert!(previews.thumbnail_reads().is_empty());
    }

    #[test]
    fn empty_registry_has_no_rows() {
        let (registry, _) = registry();
        assert!(build_rows(&registry).is_empty());

        let summary = summarize(&registry);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total_size, "0 Bytes");
    }

    #[test]
    fn summary_counts_and_totals() {
        let (mut registry, _) = registry();
        let records = vec![
            registry.new_record(png("a.png")),
            registry.new_record(png("b.png")),
        ];
        registry.append(records);

        assert_eq!(
            summarize(&registry),
            ListSummary {
                count: 2,
                total_size: "4 KB".to_string(),
                upload_label: "Upload Files (2)".to_string(),
            }
        );
    }
}
