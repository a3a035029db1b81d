//! The region operator family.

use strata_core::{EditError, GridError, Property, PropertyField, Scalar};
use strata_region::CellBox;

use crate::operate::OperateFn;

/// One edit keyword's per-cell transformation, with its arguments.
///
/// Operators are stateless beyond their arguments and are applied once per
/// record. Records are never fused: a scale followed by a clamp is two
/// applications, and the second sees the result of the first.
#[derive(Clone, Debug, PartialEq)]
pub enum RegionOperator {
    /// `t = value`.
    Equals(f64),
    /// `t = s`, between properties of the same kind.
    Copy {
        /// Property read from.
        source: String,
    },
    /// `t = t * factor`.
    Multiply(f64),
    /// `t = t + delta`.
    Add(f64),
    /// `t = max(t, floor)`.
    MinLimit(f64),
    /// `t = min(t, ceiling)`.
    MaxLimit(f64),
    /// `t = function(t, s, alpha, beta)`, double properties only.
    Operate {
        /// The per-cell function.
        function: OperateFn,
        /// Property read from.
        source: String,
        /// First parameter.
        alpha: f64,
        /// Second parameter.
        beta: f64,
    },
}

impl RegionOperator {
    /// Name of the property this operator reads, if any.
    pub fn source(&self) -> Option<&str> {
        match self {
            Self::Copy { source } | Self::Operate { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Short name for logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Equals(_) => "EQUALS",
            Self::Copy { .. } => "COPY",
            Self::Multiply(_) => "MULTIPLY",
            Self::Add(_) => "ADD",
            Self::MinLimit(_) => "MINVALUE",
            Self::MaxLimit(_) => "MAXVALUE",
            Self::Operate { .. } => "OPERATE",
        }
    }

    /// Apply to every cell of `region` in `target`.
    ///
    /// `source` must be supplied for operators that read one (see
    /// [`source`](Self::source)); it should be a snapshot taken before the
    /// record so that `OPERATE NTG ... NTG` reads pre-record values.
    ///
    /// Every new value is computed and checked before the first cell is
    /// written, so a failing record leaves `target` unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_core::{GridExtent, Property, PropertyField};
    /// use strata_ops::RegionOperator;
    /// use strata_region::{BoxBounds, CellBox};
    ///
    /// let extent = GridExtent::new(2, 2, 1).unwrap();
    /// let mut permx = Property::Double(PropertyField::filled(extent, 10.0));
    /// let corner = CellBox::new(extent, BoxBounds::from_array([0, 0, 0, 0, 0, 0])).unwrap();
    ///
    /// RegionOperator::Multiply(0.5).apply(&corner, &mut permx, None).unwrap();
    /// assert_eq!(permx.as_double().unwrap().values(), &[5.0, 10.0, 10.0, 10.0]);
    /// ```
    pub fn apply(
        &self,
        region: &CellBox,
        target: &mut Property,
        source: Option<&Property>,
    ) -> Result<(), EditError> {
        match self {
            Self::Copy { source: name } => {
                let source = required(source, name)?;
                check_extents(target, source)?;
                match (target, source) {
                    (Property::Int(t), Property::Int(s)) => copy_cells(region, t, s),
                    (Property::Double(t), Property::Double(s)) => copy_cells(region, t, s),
                    (t, s) => Err(EditError::kind_mismatch(t.kind(), s.kind())),
                }
            }
            Self::Operate {
                function,
                source: name,
                alpha,
                beta,
            } => {
                let source = required(source, name)?;
                check_extents(target, source)?;
                let (Property::Double(t), Property::Double(s)) = (target, source) else {
                    return Err(EditError::TypeMismatch {
                        reason: format!("OPERATE {function} requires double target and source"),
                    });
                };
                let values = s.values();
                update(region, t, |g, x| Ok(function.eval(x, values[g], *alpha, *beta)))
            }
            Self::Equals(v) => apply_scalar(region, target, ScalarOp::Equals(*v)),
            Self::Multiply(f) => apply_scalar(region, target, ScalarOp::Multiply(*f)),
            Self::Add(d) => apply_scalar(region, target, ScalarOp::Add(*d)),
            Self::MinLimit(floor) => apply_scalar(region, target, ScalarOp::MinLimit(*floor)),
            Self::MaxLimit(ceiling) => {
                apply_scalar(region, target, ScalarOp::MaxLimit(*ceiling))
            }
        }
    }
}

/// The operators that need no source property.
#[derive(Clone, Copy)]
enum ScalarOp {
    Equals(f64),
    Multiply(f64),
    Add(f64),
    MinLimit(f64),
    MaxLimit(f64),
}

impl ScalarOp {
    fn name(self) -> &'static str {
        match self {
            Self::Equals(_) => "EQUALS",
            Self::Multiply(_) => "MULTIPLY",
            Self::Add(_) => "ADD",
            Self::MinLimit(_) => "MINVALUE",
            Self::MaxLimit(_) => "MAXVALUE",
        }
    }
}

fn apply_scalar(region: &CellBox, target: &mut Property, op: ScalarOp) -> Result<(), EditError> {
    match target {
        Property::Int(t) => apply_scalar_to(region, t, op),
        Property::Double(t) => apply_scalar_to(region, t, op),
    }
}

fn apply_scalar_to<T: Scalar>(
    region: &CellBox,
    target: &mut PropertyField<T>,
    op: ScalarOp,
) -> Result<(), EditError> {
    let name = op.name();
    match op {
        ScalarOp::Equals(value) => {
            let value = exact::<T>(name, value)?;
            update(region, target, |_, _| Ok(value))
        }
        ScalarOp::Multiply(factor) => update(region, target, |_, x| {
            narrow::<T>(name, x.to_f64() * factor)
        }),
        ScalarOp::Add(delta) => {
            exact::<T>(name, delta)?;
            update(region, target, |_, x| narrow::<T>(name, x.to_f64() + delta))
        }
        ScalarOp::MinLimit(floor) => {
            let floor = exact::<T>(name, floor)?;
            update(region, target, |_, x| Ok(if x < floor { floor } else { x }))
        }
        ScalarOp::MaxLimit(ceiling) => {
            let ceiling = exact::<T>(name, ceiling)?;
            update(region, target, |_, x| Ok(if x > ceiling { ceiling } else { x }))
        }
    }
}

fn required<'a>(source: Option<&'a Property>, name: &str) -> Result<&'a Property, EditError> {
    source.ok_or_else(|| EditError::UnknownField {
        name: name.to_owned(),
    })
}

fn check_extents(target: &Property, source: &Property) -> Result<(), EditError> {
    if target.extent() != source.extent() {
        return Err(EditError::OutOfBounds(GridError::LengthMismatch {
            expected: target.extent().cell_count(),
            found: source.extent().cell_count(),
        }));
    }
    Ok(())
}

/// Convert an operator argument into the target kind, refusing lossy
/// conversions.
fn exact<T: Scalar>(op: &str, value: f64) -> Result<T, EditError> {
    if !T::represents(value) {
        return Err(EditError::TypeMismatch {
            reason: format!("{op} argument {value} cannot be stored in {} property", T::KIND),
        });
    }
    Ok(T::from_f64(value))
}

/// Narrow a computed result into the target kind. Integer results
/// truncate toward zero but must stay within range.
fn narrow<T: Scalar>(op: &str, value: f64) -> Result<T, EditError> {
    if !T::represents(value.trunc()) {
        return Err(EditError::TypeMismatch {
            reason: format!("{op} result {value} cannot be stored in {} property", T::KIND),
        });
    }
    Ok(T::from_f64(value))
}

/// Compute every new value in `region`, then write them. A failing cell
/// leaves the field untouched.
fn update<T: Scalar>(
    region: &CellBox,
    field: &mut PropertyField<T>,
    mut f: impl FnMut(usize, T) -> Result<T, EditError>,
) -> Result<(), EditError> {
    let extent = field.extent();
    let mut staged = Vec::with_capacity(region.cell_count());
    for (i, j, k) in region {
        let g = extent.flat_index(i, j, k)?;
        staged.push((g, f(g, field.get_flat(g)?)?));
    }
    for (g, value) in staged {
        field.set_flat(g, value)?;
    }
    Ok(())
}

fn copy_cells<T: Scalar>(
    region: &CellBox,
    target: &mut PropertyField<T>,
    source: &PropertyField<T>,
) -> Result<(), EditError> {
    update(region, target, |g, _| Ok(source.get_flat(g)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use strata_core::GridExtent;
    use strata_region::BoxBounds;

    fn extent() -> GridExtent {
        GridExtent::new(4, 3, 2).unwrap()
    }

    fn cell_box(b: [i64; 6]) -> CellBox {
        CellBox::new(extent(), BoxBounds::from_array(b)).unwrap()
    }

    fn doubles(v: f64) -> Property {
        Property::Double(PropertyField::filled(extent(), v))
    }

    fn ints(v: i32) -> Property {
        Property::Int(PropertyField::filled(extent(), v))
    }

    fn value_at(p: &Property, i: usize, j: usize, k: usize) -> f64 {
        p.get_f64(extent().flat_index(i, j, k).unwrap()).unwrap()
    }

    #[test]
    fn equals_writes_only_inside_region() {
        let mut p = ints(2);
        RegionOperator::Equals(10.0)
            .apply(&cell_box([0, 1, 0, 1, 0, 1]), &mut p, None)
            .unwrap();
        for g in 0..extent().cell_count() {
            let (i, j, k) = extent().ijk(g).unwrap();
            let expected = if i <= 1 && j <= 1 { 10.0 } else { 2.0 };
            assert_eq!(p.get_f64(g).unwrap(), expected);
        }
    }

    #[test]
    fn int_multiply_truncates() {
        let mut p = ints(3);
        RegionOperator::Multiply(0.5)
            .apply(&CellBox::full(extent()), &mut p, None)
            .unwrap();
        assert!(p.as_int().unwrap().values().iter().all(|&v| v == 1));
    }

    #[test]
    fn int_equals_rejects_fraction_before_writing() {
        let mut p = ints(3);
        let err = RegionOperator::Equals(0.5)
            .apply(&CellBox::full(extent()), &mut p, None)
            .unwrap_err();
        assert!(matches!(err, EditError::TypeMismatch { .. }));
        assert_eq!(p, ints(3));
    }

    #[test]
    fn int_add_out_of_range_changes_nothing() {
        let mut values = vec![5; extent().cell_count()];
        values[23] = i32::MAX;
        let before = Property::Int(PropertyField::from_values(extent(), values).unwrap());
        let mut p = before.clone();
        let err = RegionOperator::Add(1.0)
            .apply(&CellBox::full(extent()), &mut p, None)
            .unwrap_err();
        assert!(matches!(err, EditError::TypeMismatch { .. }));
        assert_eq!(p, before);
    }

    #[test]
    fn int_multiply_out_of_range_changes_nothing() {
        let mut p = ints(2_147_483_647);
        let err = RegionOperator::Multiply(1e12)
            .apply(&CellBox::full(extent()), &mut p, None)
            .unwrap_err();
        assert!(matches!(err, EditError::TypeMismatch { .. }));
        assert_eq!(p, ints(2_147_483_647));

        let mut q = ints(-7);
        RegionOperator::Multiply(-1.5)
            .apply(&CellBox::full(extent()), &mut q, None)
            .unwrap();
        assert_eq!(q, ints(10));
    }

    #[test]
    fn double_multiply_is_unchecked() {
        let mut p = doubles(1e300);
        RegionOperator::Multiply(1e300)
            .apply(&CellBox::full(extent()), &mut p, None)
            .unwrap();
        assert!(value_at(&p, 0, 0, 0).is_infinite());
    }

    #[test]
    fn add_and_limits() {
        let mut p = doubles(1.0);
        let all = CellBox::full(extent());
        RegionOperator::Add(2.5).apply(&all, &mut p, None).unwrap();
        assert_eq!(value_at(&p, 0, 0, 0), 3.5);
        RegionOperator::MaxLimit(3.0)
            .apply(&cell_box([0, 0, 0, 0, 0, 0]), &mut p, None)
            .unwrap();
        assert_eq!(value_at(&p, 0, 0, 0), 3.0);
        assert_eq!(value_at(&p, 1, 0, 0), 3.5);
        RegionOperator::MinLimit(4.0)
            .apply(&cell_box([1, 1, 0, 0, 0, 0]), &mut p, None)
            .unwrap();
        assert_eq!(value_at(&p, 1, 0, 0), 4.0);
        assert_eq!(value_at(&p, 2, 0, 0), 3.5);
    }

    #[test]
    fn copy_requires_matching_kinds() {
        let mut t = doubles(0.0);
        let s = ints(4);
        let op = RegionOperator::Copy {
            source: "SATNUM".into(),
        };
        assert!(matches!(
            op.apply(&CellBox::full(extent()), &mut t, Some(&s)),
            Err(EditError::TypeMismatch { .. })
        ));
        assert_eq!(t, doubles(0.0));
    }

    #[test]
    fn copy_within_region() {
        let mut t = doubles(0.0);
        let mut s = doubles(0.0);
        if let Property::Double(f) = &mut s {
            f.set(3, 2, 1, 9.0).unwrap();
            f.set(0, 0, 0, 7.0).unwrap();
        }
        let op = RegionOperator::Copy {
            source: "PERMX".into(),
        };
        op.apply(&cell_box([2, 3, 2, 2, 1, 1]), &mut t, Some(&s))
            .unwrap();
        assert_eq!(value_at(&t, 3, 2, 1), 9.0);
        assert_eq!(value_at(&t, 0, 0, 0), 0.0);
    }

    #[test]
    fn missing_source_is_unknown_field() {
        let mut t = doubles(0.0);
        let op = RegionOperator::Copy {
            source: "PERMQ".into(),
        };
        assert_eq!(
            op.apply(&CellBox::full(extent()), &mut t, None),
            Err(EditError::UnknownField {
                name: "PERMQ".into()
            })
        );
    }

    #[test]
    fn operate_reads_snapshot_of_target() {
        let mut ntg = doubles(3.0);
        let snapshot = ntg.clone();
        let op = RegionOperator::Operate {
            function: OperateFn::Multa,
            source: "NTG".into(),
            alpha: 2.5,
            beta: 1.0,
        };
        op.apply(&cell_box([0, 0, 0, 0, 0, 0]), &mut ntg, Some(&snapshot))
            .unwrap();
        assert_eq!(value_at(&ntg, 0, 0, 0), 8.5);
        assert_eq!(value_at(&ntg, 1, 0, 0), 3.0);
    }

    #[test]
    fn operate_rejects_int_target() {
        let mut t = ints(1);
        let s = doubles(1.0);
        let op = RegionOperator::Operate {
            function: OperateFn::Copy,
            source: "NTG".into(),
            alpha: 0.0,
            beta: 0.0,
        };
        assert!(matches!(
            op.apply(&CellBox::full(extent()), &mut t, Some(&s)),
            Err(EditError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn source_on_other_extent_is_rejected() {
        let mut t = doubles(0.0);
        let other = GridExtent::new(2, 2, 2).unwrap();
        let s = Property::Double(PropertyField::filled(other, 1.0));
        let op = RegionOperator::Copy {
            source: "X".into(),
        };
        assert!(matches!(
            op.apply(&CellBox::full(extent()), &mut t, Some(&s)),
            Err(EditError::OutOfBounds(_))
        ));
    }

    fn arb_box() -> impl Strategy<Value = CellBox> {
        (0i64..4, 0i64..4, 0i64..3, 0i64..3, 0i64..2, 0i64..2).prop_map(
            |(a, b, c, d, e, f)| cell_box([a.min(b), a.max(b), c.min(d), c.max(d), e.min(f), e.max(f)]),
        )
    }

    proptest! {
        #[test]
        fn equals_is_exact_and_idempotent(region in arb_box(), v in -1e6f64..1e6, init in -10f64..10.0) {
            let mut once = doubles(init);
            RegionOperator::Equals(v).apply(&region, &mut once, None).unwrap();
            let mut twice = once.clone();
            RegionOperator::Equals(v).apply(&region, &mut twice, None).unwrap();
            prop_assert_eq!(&once, &twice);
            for g in 0..extent().cell_count() {
                let (i, j, k) = extent().ijk(g).unwrap();
                let expected = if region.contains(i, j, k) { v } else { init };
                prop_assert_eq!(once.get_f64(g).unwrap(), expected);
            }
        }

        #[test]
        fn multiply_scales_region_only(region in arb_box(), f in -100f64..100.0) {
            let before = Property::Double(
                PropertyField::from_values(extent(), (0..24).map(|g| g as f64 * 0.5).collect()).unwrap(),
            );
            let mut after = before.clone();
            RegionOperator::Multiply(f).apply(&region, &mut after, None).unwrap();
            for g in 0..extent().cell_count() {
                let (i, j, k) = extent().ijk(g).unwrap();
                let old = before.get_f64(g).unwrap();
                let expected = if region.contains(i, j, k) { old * f } else { old };
                prop_assert_eq!(after.get_f64(g).unwrap(), expected);
            }
        }
    }
}
