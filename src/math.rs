#[macro_export]
/// Implementation of the Kahan-Babushka-Neumaier algorithm for reduced numerical error in summation
///
/// <https://en.wikipedia.org/wiki/Kahan_summation_algorithm#Further_enhancements>
macro_rules! kbn_summation {
    (for $pat: pat in $expr: expr => {
        $($var: ident += $var_expr: expr;)*
    }) => {
        let ($($var,)*) = {
            use paste::paste;
            paste! {
                $(
                    let mut $var: f64 = 0.;
                    let mut [<$var compensation>] = 0.;
                )*
                    for $pat in $expr {
                        $(
                            let input = $var_expr;
                            let t = $var + input;
                            [<$var compensation>] += if $var.abs() >= input.abs() {
                                ($var - t) + input
                            } else {
                                (input - t) + $var
                            };
                            $var = t;
                        )*
                    }
                ($($var + [<$var compensation>],)*)
            }
        };
    };
}

#[cfg(test)]
#[test]
fn test_summation() {
    // Naive accumulation of these loses the tail; the compensated sum must not.
    let input = [1e16, 1., -1e16, 1., 1., 1.];
    kbn_summation! {
        for x in input => {
            out += x;
        }
    }

    assert_ne!(input.iter().sum::<f64>(), out);
    assert_eq!(out, 4.);
}
