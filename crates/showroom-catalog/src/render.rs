//! The presentation seam.

use crate::filter::VisibleList;
use crate::Catalog;

/// Presents a computed view.
///
/// The engine only produces ids and counts; showing, hiding, reordering and
/// the "Showing N results" line are the renderer's job. Implementations look
/// items up in the catalog by id.
pub trait Renderer {
    /// Error raised when presentation fails (e.g. a closed stdout).
    type Error;

    /// Presents `view`.
    fn render(&mut self, catalog: &Catalog, view: &VisibleList) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{Criterion, FilterEngine, Slot};
    use crate::Item;

    /// Records the names it was asked to show.
    #[derive(Default)]
    struct Recorder {
        shown: Vec<String>,
        summaries: Vec<String>,
    }

    impl Renderer for Recorder {
        type Error = std::convert::Infallible;

        fn render(&mut self, catalog: &Catalog, view: &VisibleList) -> Result<(), Self::Error> {
            self.shown = view
                .ids
                .iter()
                .filter_map(|id| catalog.get(id))
                .map(|item| item.name.clone())
                .collect();
            self.summaries
                .push(format!("Showing {} of {}", view.count, view.total));
            Ok(())
        }
    }

    #[test]
    fn test_renderer_receives_engine_output() {
        let catalog = Catalog::new(vec![
            Item::new("a", "Honda Click", "scooter", "honda", 90000.0),
            Item::new("b", "Kawasaki Ninja", "sport", "kawasaki", 250000.0),
        ])
        .unwrap();
        let mut engine = FilterEngine::new(&catalog);
        let mut renderer = Recorder::default();

        renderer.render(&catalog, &engine.recompute()).unwrap();
        engine.set_criterion(Slot::Category, Some(Criterion::category("sport")));
        renderer.render(&catalog, &engine.recompute()).unwrap();

        assert_eq!(renderer.shown, vec!["Kawasaki Ninja".to_string()]);
        assert_eq!(renderer.summaries, vec!["Showing 2 of 2", "Showing 1 of 2"]);
    }
}
