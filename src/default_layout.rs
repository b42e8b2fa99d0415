//! Default desktop layout for the show-all-apps mode
//!
//! Splits the installed apps into pages of `grid_x * grid_y` slots. Within a
//! page, columns are walked outermost (x), rows innermost (y), and the app for
//! slot (x, y) is taken from flat index `y * grid_y + x`. That index mixes the
//! two grid extents; it is kept as-is because existing desktops were laid out
//! with it. On non-square grids this repeats some apps on a page and skips
//! others.

use tracing::{info, warn};

use crate::layout::{AppDescriptor, Item, Page};

/// Number of pages needed for `app_count` apps at `capacity` apps per page
pub fn page_count(app_count: usize, capacity: usize) -> usize {
    if capacity == 0 {
        return 0;
    }

    let mut remaining = app_count;
    let mut pages = 0;
    while remaining > capacity {
        remaining -= capacity;
        pages += 1;
    }
    if remaining > 0 {
        pages += 1;
    }
    pages
}

/// Build desktop pages holding every app in catalog order
pub fn generate_default_pages(apps: &[AppDescriptor], grid_x: i32, grid_y: i32) -> Vec<Page> {
    let (Ok(columns), Ok(rows)) = (usize::try_from(grid_x), usize::try_from(grid_y)) else {
        warn!(grid_x, grid_y, "Negative desktop grid, not generating default layout");
        return Vec::new();
    };
    let capacity = columns * rows;
    if capacity == 0 {
        warn!(grid_x, grid_y, "Empty desktop grid, not generating default layout");
        return Vec::new();
    }

    let count = page_count(apps.len(), capacity);
    let mut pages = Vec::with_capacity(count);

    for page_index in 0..count {
        let mut items = Vec::new();
        for x in 0..columns {
            for y in 0..rows {
                let page_pos = y * rows + x;
                let pos = capacity * page_index + page_pos;
                if let Some(app) = apps.get(pos) {
                    items.push(Item::app(app.clone(), x as i32, y as i32));
                }
            }
        }
        let page = Page::new(items);
        if !page.is_empty() {
            pages.push(page);
        }
    }

    info!(apps = apps.len(), pages = pages.len(), grid_x, grid_y, "Generated default desktop layout");
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apps(n: usize) -> Vec<AppDescriptor> {
        (0..n)
            .map(|i| AppDescriptor::new(&format!("app.{i}"), "Main", &i.to_string()))
            .collect()
    }

    fn labels(page: &Page) -> Vec<String> {
        page.items
            .iter()
            .map(|item| match item {
                Item::AppShortcut(app) => app.app.label.clone(),
                other => panic!("unexpected item {other:?}"),
            })
            .collect()
    }

    #[test]
    fn test_page_count_is_ceiling() {
        assert_eq!(page_count(0, 16), 0);
        assert_eq!(page_count(1, 16), 1);
        assert_eq!(page_count(16, 16), 1);
        assert_eq!(page_count(17, 16), 2);
        assert_eq!(page_count(32, 16), 2);
        assert_eq!(page_count(33, 16), 3);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_33_apps_on_4x4_grid() {
        let pages = generate_default_pages(&apps(33), 4, 4);
        let sizes: Vec<usize> = pages.iter().map(|p| p.items.len()).collect();
        assert_eq!(sizes, vec![16, 16, 1]);

        assert_eq!(labels(&pages[2]), vec!["32".to_string()]);
        assert_eq!(pages[2].items[0].position(), (0, 0));
    }

    #[test]
    fn test_square_grid_places_app_k_at_column_k_mod_x() {
        let pages = generate_default_pages(&apps(16), 4, 4);
        assert_eq!(pages.len(), 1);
        for item in &pages[0].items {
            let Item::AppShortcut(app) = item else {
                panic!("expected app shortcut");
            };
            let index: i32 = app.app.label.parse().unwrap();
            assert_eq!((app.x, app.y), (index % 4, index / 4));
        }
        // columns are walked first
        assert_eq!(pages[0].items[1].position(), (0, 1));
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_empty_page() {
        let pages = generate_default_pages(&apps(32), 4, 4);
        assert_eq!(pages.len(), 2);
        assert!(pages.iter().all(|p| p.items.len() == 16));
    }

    #[test]
    fn test_non_square_grid_keeps_mixed_slot_index() {
        let pages = generate_default_pages(&apps(6), 3, 2);
        assert_eq!(pages.len(), 1);
        assert_eq!(labels(&pages[0]), vec!["0", "2", "1", "3", "2", "4"]);
    }

    #[test]
    fn test_no_apps_or_empty_grid() {
        assert!(generate_default_pages(&[], 4, 4).is_empty());
        assert!(generate_default_pages(&apps(3), 0, 4).is_empty());
        assert!(generate_default_pages(&apps(3), -1, 4).is_empty());
    }
}
