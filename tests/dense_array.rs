//! Integration tests for DenseArray construction, release and access.

use std::cell::Cell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dense_array::{ArrayError, DenseArray};

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn empty_has_no_storage() {
    let a: DenseArray = DenseArray::empty();
    assert_eq!(a.rank(), 0);
    assert!(a.shape().is_empty());
    assert!(a.is_empty());
    assert_eq!(a.len(), 0);
    assert_eq!(a, DenseArray::default());
}

#[test]
fn two_by_two_matrix() {
    let a = DenseArray::new(&[2, 2], &[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(a.rank(), 2);
    assert_eq!(a.shape(), &[2, 2]);
    assert_eq!(a.len(), 4);
    assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn mismatched_length_is_rejected() {
    let result = DenseArray::new(&[2, 2], &[1.0, 2.0, 3.0]);
    assert_eq!(
        result,
        Err(ArrayError::ShapeMismatch {
            shape: vec![2, 2],
            len: 3
        })
    );
}

#[test]
fn copying_and_owning_constructors_agree_on_errors() {
    let copied = DenseArray::new(&[3, 2], &[1.0; 5]).unwrap_err();
    let owned = DenseArray::from_shape_vec(vec![3, 2], vec![1.0; 5]).unwrap_err();
    assert_eq!(copied, owned);
    assert_eq!(
        copied,
        ArrayError::ShapeMismatch {
            shape: vec![3, 2],
            len: 5
        }
    );
}

#[test]
fn too_many_values_is_rejected() {
    let result = DenseArray::from_shape_vec(vec![2], vec![1.0, 2.0, 3.0]);
    assert!(matches!(result, Err(ArrayError::ShapeMismatch { len: 3, .. })));
}

#[test]
fn rank_zero_rejects_values() {
    let result = DenseArray::new(&[], &[1.0]);
    assert!(matches!(result, Err(ArrayError::ShapeMismatch { .. })));

    let empty = DenseArray::<f64>::new(&[], &[]).unwrap();
    assert_eq!(empty, DenseArray::empty());
}

#[test]
fn zero_sized_axis_holds_nothing() {
    let a = DenseArray::<f64>::new(&[4, 0, 2], &[]).unwrap();
    assert_eq!(a.rank(), 3);
    assert!(a.is_empty());
}

#[test]
fn overflowing_shape_is_rejected() {
    let result = DenseArray::<f64>::new(&[usize::MAX, 3], &[]);
    assert!(matches!(result, Err(ArrayError::ShapeOverflow { .. })));
}

#[test]
fn random_shapes_report_their_length() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let rank = rng.gen_range(1..5);
        let shape: Vec<usize> = (0..rank).map(|_| rng.gen_range(0..5)).collect();
        let count: usize = shape.iter().product();
        let values: Vec<f64> = (0..count).map(|i| i as f64).collect();
        let a = DenseArray::new(&shape, &values).unwrap();
        assert_eq!(a.len(), values.len());
        assert_eq!(a.shape(), shape.as_slice());
    }
}

#[test]
fn zeros_and_from_elem() {
    let z = DenseArray::<f32>::zeros(&[2, 3]).unwrap();
    assert_eq!(z.len(), 6);
    assert!(z.iter().all(|&v| v == 0.0));

    let f = DenseArray::from_elem(&[3], 7u8).unwrap();
    assert_eq!(f.as_slice(), &[7, 7, 7]);
}

#[test]
fn random_uniform_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    let a = DenseArray::random_uniform(&[4, 5], -1.0, 1.0, &mut rng).unwrap();
    assert_eq!(a.len(), 20);
    assert!(a.iter().all(|&v| (-1.0..1.0).contains(&v)));
}

#[test]
fn random_uniform_rejects_bad_range() {
    let mut rng = StdRng::seed_from_u64(42);
    assert!(matches!(
        DenseArray::random_uniform(&[2], 1.0, 1.0, &mut rng),
        Err(ArrayError::InvalidRange { .. })
    ));
    assert!(DenseArray::random_uniform(&[2], 0.0, f64::NAN, &mut rng).is_err());
    assert!(DenseArray::random_uniform(&[2], 0.0, f64::INFINITY, &mut rng).is_err());
}

#[test]
fn random_uniform_rejects_range_wider_than_f64() {
    let mut rng = StdRng::seed_from_u64(42);
    assert_eq!(
        DenseArray::random_uniform(&[2], -f64::MAX, f64::MAX, &mut rng),
        Err(ArrayError::InvalidRange {
            low: -f64::MAX,
            high: f64::MAX
        })
    );
    let a = DenseArray::random_uniform(&[2], -f64::MAX / 2.0, f64::MAX / 2.0, &mut rng).unwrap();
    assert_eq!(a.len(), 2);
}

// ---------------------------------------------------------------------------
// Release
// ---------------------------------------------------------------------------

struct Tracked(Rc<Cell<usize>>);

impl Drop for Tracked {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn scope_exit_drops_each_element_once() {
    let drops = Rc::new(Cell::new(0));
    {
        let items = (0..4).map(|_| Tracked(drops.clone())).collect();
        let _a = DenseArray::from_shape_vec(vec![2, 2], items).unwrap();
        assert_eq!(drops.get(), 0);
    }
    assert_eq!(drops.get(), 4);
}

#[test]
fn release_then_scope_exit_does_not_double_drop() {
    let drops = Rc::new(Cell::new(0));
    {
        let items = (0..6).map(|_| Tracked(drops.clone())).collect();
        let mut a = DenseArray::from_shape_vec(vec![3, 2], items).unwrap();
        a.release();
        assert_eq!(drops.get(), 6);
        a.release();
        assert_eq!(drops.get(), 6);
        assert_eq!(a.rank(), 0);
    }
    assert_eq!(drops.get(), 6);
}

#[test]
fn rejected_buffer_is_dropped_once() {
    let drops = Rc::new(Cell::new(0));
    let items = (0..3).map(|_| Tracked(drops.clone())).collect();
    assert!(DenseArray::from_shape_vec(vec![2, 2], items).is_err());
    assert_eq!(drops.get(), 3);
}

#[test]
fn releasing_empty_is_noop() {
    let mut a: DenseArray = DenseArray::empty();
    a.release();
    assert_eq!(a, DenseArray::empty());
}

// ---------------------------------------------------------------------------
// Access
// ---------------------------------------------------------------------------

#[test]
fn indexing_is_row_major() {
    let a = DenseArray::new(&[2, 3], &[1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(a[[0, 0]], 1);
    assert_eq!(a[[0, 2]], 3);
    assert_eq!(a[[1, 0]], 4);
    assert_eq!(a[&[1, 2][..]], 6);
    assert_eq!(a.strides(), vec![3, 1]);
}

#[test]
fn get_reports_bad_indices() {
    let a = DenseArray::new(&[2, 2], &[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(a.get(&[1, 1]), Ok(&4.0));
    assert!(matches!(
        a.get(&[1]),
        Err(ArrayError::RankMismatch {
            expected: 2,
            found: 1
        })
    ));
    assert!(matches!(
        a.get(&[0, 2]),
        Err(ArrayError::IndexOutOfBounds { .. })
    ));
}

#[test]
fn mutation_through_index() {
    let mut a = DenseArray::<f64>::zeros(&[2, 2]).unwrap();
    a[[1, 0]] = 5.0;
    *a.get_mut(&[0, 1]).unwrap() = 2.0;
    assert_eq!(a.as_slice(), &[0.0, 2.0, 5.0, 0.0]);
}

#[test]
fn mapv_keeps_shape() {
    let a = DenseArray::new(&[3, 1], &[1.0f32, 2.0, 3.0]).unwrap();
    let neg = a.mapv(|x| -x);
    assert_eq!(neg.shape(), &[3, 1]);
    assert_eq!(neg.into_vec(), vec![-1.0, -2.0, -3.0]);
}

// ---------------------------------------------------------------------------
// Interop
// ---------------------------------------------------------------------------

#[test]
fn ndarray_conversion_preserves_layout() {
    let a = DenseArray::new(&[2, 3], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let nd = a.to_ndarray().unwrap();
    assert_eq!(nd.shape(), &[2, 3]);
    assert_eq!(nd[&[1usize, 0][..]], 4.0);

    let back = DenseArray::from_ndarray(&nd).unwrap();
    assert_eq!(back, a);
}

#[test]
fn ndarray_transposed_view_is_copied_in_logical_order() {
    let a = DenseArray::new(&[2, 3], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let transposed = a.to_ndarray().unwrap().reversed_axes();
    let t = DenseArray::from_ndarray(&transposed).unwrap();
    assert_eq!(t.shape(), &[3, 2]);
    assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
}

#[test]
fn ndarray_edge_cases() {
    let empty: DenseArray = DenseArray::empty();
    assert_eq!(empty.to_ndarray().unwrap().shape(), &[0]);

    let scalar = ndarray::arr0(3.5).into_dyn();
    let a = DenseArray::from_ndarray(&scalar).unwrap();
    assert_eq!(a.shape(), &[1]);
    assert_eq!(a.as_slice(), &[3.5]);
}

#[test]
fn serde_validates_buffers() {
    let a = DenseArray::new(&[2, 2], &[1.0, 2.0, 3.0, 4.0]).unwrap();
    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, r#"{"shape":[2,2],"data":[1.0,2.0,3.0,4.0]}"#);
    let back: DenseArray = serde_json::from_str(&json).unwrap();
    assert_eq!(back, a);

    let bad = serde_json::from_str::<DenseArray>(r#"{"shape":[2,2],"data":[1.0]}"#);
    let message = bad.unwrap_err().to_string();
    assert!(message.contains("invalid shape [2, 2]"), "{}", message);
}
