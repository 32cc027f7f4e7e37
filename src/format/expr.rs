use crate::expr::Expr;
use num_rational::BigRational;
use num_traits::{One, Signed};

pub fn pretty(expr: &Expr) -> String {
    fn pp(ctx: u8, expr: &Expr) -> String {
        match expr {
            Expr::Variable(v) => v.clone(),
            Expr::Constant(r) => show_rational(r),

            Expr::Add(a, b) => {
                let s_a = pp(1, a);
                let (neg_b, b_inner) = split_neg(b);
                let s_b = pp(2, &b_inner);
                let body = format!("{s_a}{}{s_b}", if neg_b { "-" } else { "+" });
                bracket(ctx, 1, body)
            }

            Expr::Sub(a, b) => {
                let s_a = pp(1, a);
                let (neg_b, b_inner) = split_neg(b);
                let s_b = pp(2, &b_inner);
                let body = format!("{s_a}{}{s_b}", if neg_b { "+" } else { "-" });
                bracket(ctx, 1, body)
            }

            Expr::Mul(a, b) => {
                let (na, a_inner) = split_neg(a);
                let (nb, b_inner) = split_neg(b);
                let body = format!("{}*{}", pp(2, &a_inner), pp(2, &b_inner));
                if na ^ nb {
                    bracket(ctx, 2, format!("-({body})"))
                } else {
                    bracket(ctx, 2, body)
                }
            }

            Expr::Div(a, b) => {
                let (na, a_inner) = split_neg(a);
                let (nb, b_inner) = split_neg(b);
                let body = format!("{} / {}", pp(2, &a_inner), pp(3, &b_inner));
                if na ^ nb {
                    bracket(ctx, 2, format!("-({body})"))
                } else {
                    bracket(ctx, 2, body)
                }
            }

            Expr::Neg(a) => {
                let (is_neg, inner) = split_neg(a);
                if is_neg {
                    pp(3, &inner)
                } else {
                    format!("-{}", pp(3, &inner))
                }
            }
        }
    }

    pp(0, expr)
}

/// Render an exact value the way it is judged for niceness: `4`, `-9/5`.
pub fn show_rational(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else if n.is_negative() {
        format!("-{}/{d}", -n)
    } else {
        format!("{n}/{d}")
    }
}

fn split_neg(expr: &Expr) -> (bool, Expr) {
    match expr {
        Expr::Neg(inner) => (true, *inner.clone()),
        Expr::Constant(r) if r.is_negative() => (true, Expr::Constant(-r)),
        other => (false, other.clone()),
    }
}

fn bracket(ctx: u8, prec: u8, body: String) -> String {
    if prec < ctx {
        format!("({body})")
    } else {
        body
    }
}
