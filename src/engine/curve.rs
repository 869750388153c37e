use log::debug;

use crate::domain::Domain;
use crate::engine::evaluator::Evaluator;
use crate::intersect::Point;

/// A plotted expression with its cached analysis products.
///
/// The domain is computed once when the text is set and only changes with the
/// text. The point cache fills lazily on the first [`Curve::points`] call, is
/// keyed by the requesting view and pixel width, and is owned by this value
/// alone; the caller invalidates it explicitly when a bound parameter
/// changes.
#[derive(Debug)]
pub struct Curve {
    text: String,
    domain: Domain,
    cache: Option<CachedPoints>,
}

#[derive(Debug)]
struct CachedPoints {
    view_min: f64,
    view_max: f64,
    pixel_width: usize,
    points: Vec<Point>,
}

impl CachedPoints {
    fn matches(&self, view_min: f64, view_max: f64, pixel_width: usize) -> bool {
        self.view_min == view_min && self.view_max == view_max && self.pixel_width == pixel_width
    }
}

impl Curve {
    pub fn new(evaluator: &Evaluator, text: impl Into<String>) -> Self {
        let text = text.into();
        let domain = evaluator.domain_of(&text);
        Self {
            text,
            domain,
            cache: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Replace the expression text, recomputing the domain and dropping any
    /// cached points.
    pub fn set_text(&mut self, evaluator: &Evaluator, text: impl Into<String>) {
        self.text = text.into();
        self.domain = evaluator.domain_of(&self.text);
        self.cache = None;
    }

    /// Drop the cached points. Call when a parameter bound into the
    /// expression changes; a moved viewport is picked up by the cache key.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    /// The drawable points of this curve across the view, computed on first
    /// use and cached until the view or pixel width changes,
    /// [`Curve::invalidate`], or [`Curve::set_text`].
    ///
    /// Sample x positions come from the domain (so restricted regions are
    /// never probed); samples whose evaluation fails or is non-finite are
    /// dropped, leaving a gap for the renderer.
    pub fn points(
        &mut self,
        evaluator: &Evaluator,
        view_min: f64,
        view_max: f64,
        pixel_width: usize,
    ) -> &[Point] {
        let reusable = self
            .cache
            .as_ref()
            .is_some_and(|cache| cache.matches(view_min, view_max, pixel_width));
        if !reusable {
            let xs = self.domain.sample_points(view_min, view_max, pixel_width);
            let computed: Vec<Point> = xs
                .into_iter()
                .filter_map(|x| match evaluator.evaluate(&self.text, x) {
                    Ok(y) if y.is_finite() => Some(Point { x, y }),
                    _ => None,
                })
                .collect();
            debug!(
                "Computed {} points for '{}' over [{}, {}]",
                computed.len(),
                self.text,
                view_min,
                view_max
            );
            self.cache = Some(CachedPoints {
                view_min,
                view_max,
                pixel_width,
                points: computed,
            });
        }
        match &self.cache {
            Some(cache) => &cache.points,
            None => &[],
        }
    }
}
