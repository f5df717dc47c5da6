#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]

use crate::vector3::Vector3;
use auto_ops::*;

// Vector operators delegate to the named methods.

impl_op_ex!(+|a: &Vector3, b: &Vector3| -> Vector3 {
    Vector3::add(*a, *b)
});

impl_op_ex!(+=|a: &mut Vector3, b: &Vector3| {
    Vector3::madd(a, *b);
});

impl_op_ex!(-|a: &Vector3, b: &Vector3| -> Vector3 {
    Vector3::sub(*a, *b)
});

impl_op_ex!(-=|a: &mut Vector3, b: &Vector3| {
    Vector3::msub(a, *b);
});

impl_op_ex!(*|a: &Vector3, b: &Vector3| -> Vector3 {
    Vector3::mul(*a, *b)
});

impl_op_ex!(*=|a: &mut Vector3, b: &Vector3| {
    Vector3::mmul(a, *b);
});

impl_op_ex!(/|a: &Vector3, b: &Vector3| -> Vector3 {
    Vector3::div(*a, *b)
});

impl_op_ex!(/=|a: &mut Vector3, b: &Vector3| {
    Vector3::mdiv(a, *b);
});

impl_op_ex!(-|a: &Vector3| -> Vector3 { Vector3::neg(*a) });

// Uniform scalar operators act on raw components, unlike `Vector3::scale`.

impl_op_ex_commutative!(*|a: &Vector3, s: &f64| -> Vector3 {
    Vector3::new(a.x * s, a.y * s, a.z * s)
});

impl_op_ex!(*=|a: &mut Vector3, s: &f64| {
    a.x *= s;
    a.y *= s;
    a.z *= s;
});

impl_op_ex!(/|a: &Vector3, s: &f64| -> Vector3 {
    Vector3::new(a.x / s, a.y / s, a.z / s)
});

impl_op_ex!(/=|a: &mut Vector3, s: &f64| {
    a.x /= s;
    a.y /= s;
    a.z /= s;
});
