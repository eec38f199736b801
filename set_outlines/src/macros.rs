/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !($crate::core::traits::FuzzyEq::fuzzy_eq(left_val, *right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !($crate::core::traits::FuzzyEq::fuzzy_eq_eps(left_val, *right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
   eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Construct a `Vec` of rectangles from `(min_x, min_y, width, height)` tuples.
///
/// # Examples
///
/// ```
/// # use set_outlines::rects;
/// # use set_outlines::Rect;
/// let group = rects![(0.0, 0.0, 10.0, 5.0), (20.0, 0.0, 10.0, 5.0)];
/// assert_eq!(group.len(), 2);
/// assert_eq!(group[1], Rect::new(20.0, 0.0, 10.0, 5.0));
/// ```
#[macro_export]
macro_rules! rects {
    ($( $r:expr ),* $(,)?) => {
        vec![$($crate::Rect::new($r.0, $r.1, $r.2, $r.3)),*]
    };
}
