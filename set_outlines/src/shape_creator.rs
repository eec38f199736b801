use crate::{
    IdentityMapper, Rect, RectMapper, SetOutline, ShapeConverter, ShapeCreatorOptions,
    core::traits::Real,
    error::{RectRole, ShapeCreatorError, validate_rects},
};
use tracing::{debug, trace};

/// Creates one outline shape per set of rectangles.
///
/// For every set the rectangles of all other sets are collected as non-members, both are passed
/// through the rectangle mapper `M` (with the current radius), handed to the outline generator
/// `G`, and the resulting points are turned into a shape by the converter `C`.
///
/// # Examples
///
/// ```
/// # use set_outlines::*;
/// let creator: ShapeCreator<_, _, IdentityMapper, f64> = ShapeCreator::new(ConvexHullOutline, PolygonConverter);
/// let groups = vec![
///     rects![(0.0, 0.0, 10.0, 10.0), (20.0, 0.0, 10.0, 10.0)],
///     rects![(0.0, 30.0, 5.0, 5.0)],
/// ];
/// let shapes = creator.create_shapes_for(&groups).unwrap();
/// assert_eq!(shapes.len(), 2);
/// assert_eq!(shapes[0].len(), 4);
/// assert!((shapes[0].area() - 300.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct ShapeCreator<G, C, M = IdentityMapper, T = f64> {
    outline: G,
    converter: C,
    mapper: M,
    radius: T,
}

impl<G, C, T> ShapeCreator<G, C, IdentityMapper, T>
where
    T: Real,
    G: SetOutline<T>,
    C: ShapeConverter<T>,
{
    /// Create with the identity rectangle mapper and default options.
    pub fn new(outline: G, converter: C) -> Self {
        Self::with_options(
            outline,
            converter,
            IdentityMapper,
            &ShapeCreatorOptions::default(),
        )
    }
}

impl<G, C, M, T> ShapeCreator<G, C, M, T>
where
    T: Real,
    G: SetOutline<T>,
    C: ShapeConverter<T>,
    M: RectMapper<T>,
{
    /// Create with a custom rectangle mapper and default options.
    pub fn with_mapper(outline: G, converter: C, mapper: M) -> Self {
        Self::with_options(outline, converter, mapper, &ShapeCreatorOptions::default())
    }

    pub fn with_options(
        outline: G,
        converter: C,
        mapper: M,
        options: &ShapeCreatorOptions<T>,
    ) -> Self {
        ShapeCreator {
            outline,
            converter,
            mapper,
            radius: options.radius,
        }
    }

    /// Radius handed to the rectangle mapper.
    #[inline]
    pub fn radius(&self) -> T {
        self.radius
    }

    /// Set the radius used by subsequent calls, shapes already created are not affected. No
    /// validation is performed.
    #[inline]
    pub fn set_radius(&mut self, radius: T) {
        self.radius = radius;
    }

    #[inline]
    pub fn outline(&self) -> &G {
        &self.outline
    }

    #[inline]
    pub fn converter(&self) -> &C {
        &self.converter
    }

    #[inline]
    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    /// Map rectangles through the configured mapper using the current radius.
    #[inline]
    pub fn map_rects(&self, rects: &[Rect<T>]) -> Vec<Rect<T>> {
        self.mapper.map_rects(rects, self.radius)
    }

    /// Create the shape for one set given its `members` and the `non_members` to steer away
    /// from.
    ///
    /// Fails with [ShapeCreatorError::InvalidArgument] if any rectangle is not finite (before the
    /// outline generator is invoked) and with [ShapeCreatorError::Outline] if the outline
    /// generator fails.
    pub fn create_shape_for(
        &self,
        members: &[Rect<T>],
        non_members: &[Rect<T>],
    ) -> Result<C::Shape, ShapeCreatorError<G::Error, T>> {
        validate_rects::<G::Error, T>(members, RectRole::Member)?;
        validate_rects::<G::Error, T>(non_members, RectRole::NonMember)?;
        self.create_shape_unchecked(members, non_members)
    }

    fn create_shape_unchecked(
        &self,
        members: &[Rect<T>],
        non_members: &[Rect<T>],
    ) -> Result<C::Shape, ShapeCreatorError<G::Error, T>> {
        let m = self.map_rects(members);
        let n = self.map_rects(non_members);
        let points = self
            .outline
            .create_outline(&m, &n)
            .map_err(ShapeCreatorError::Outline)?;
        trace!(
            members = m.len(),
            non_members = n.len(),
            points = points.len(),
            "outline created"
        );

        Ok(self.converter.convert_to_shape(&points))
    }

    /// Create one shape per group, in the order of `groups`.
    ///
    /// The non-members of group `i` are the rectangles of every other group, concatenated in
    /// group order. All rectangles are validated before any outline is generated.
    pub fn create_shapes_for<R>(
        &self,
        groups: &[R],
    ) -> Result<Vec<C::Shape>, ShapeCreatorError<G::Error, T>>
    where
        R: AsRef<[Rect<T>]>,
    {
        // flatten all groups so non-members are a prefix and suffix of one buffer,
        // group i occupies all_rects[offsets[i]..offsets[i + 1]]
        let mut offsets = Vec::with_capacity(groups.len() + 1);
        let mut all_rects = Vec::new();
        offsets.push(0);
        for (group_idx, group) in groups.iter().enumerate() {
            let group = group.as_ref();
            validate_rects::<G::Error, T>(group, RectRole::Group(group_idx))?;
            all_rects.extend_from_slice(group);
            offsets.push(all_rects.len());
        }

        debug!(
            groups = groups.len(),
            rects = all_rects.len(),
            radius = ?self.radius,
            "creating set shapes"
        );

        let mut shapes = Vec::with_capacity(groups.len());
        let mut non_members = Vec::with_capacity(all_rects.len());
        for (group_idx, group) in groups.iter().enumerate() {
            let start = offsets[group_idx];
            let end = offsets[group_idx + 1];
            non_members.clear();
            non_members.extend_from_slice(&all_rects[..start]);
            non_members.extend_from_slice(&all_rects[end..]);
            trace!(group = group_idx, members = end - start, "partitioned group");
            shapes.push(self.create_shape_unchecked(group.as_ref(), &non_members)?);
        }

        Ok(shapes)
    }

    /// Same as [ShapeCreator::create_shapes_for] for groups given as nested collections.
    pub fn create_shapes_for_lists<I, J>(
        &self,
        groups: I,
    ) -> Result<Vec<C::Shape>, ShapeCreatorError<G::Error, T>>
    where
        I: IntoIterator<Item = J>,
        J: IntoIterator<Item = Rect<T>>,
    {
        let groups: Vec<Vec<Rect<T>>> = groups
            .into_iter()
            .map(|group| group.into_iter().collect())
            .collect();
        self.create_shapes_for(&groups)
    }
}
