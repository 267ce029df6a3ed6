/// Unwraps an `Err`, panicking with the `Ok` value otherwise. An optional
/// format string is appended to the panic message.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            Ok(value) => {
                #[allow(unused_mut)]
                let mut msg = format!("expected `Err`; actual=Ok({:?})", value);
                $(
                    msg.push_str(", ");
                    msg.push_str(&format!($($t)*));
                )?
                panic!("{}", msg);
            }
        }
    };
}

/// Unwraps an `Ok`, panicking with the error's display form otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(err) => panic!("expected `Ok`; actual=Err({})", err),
        }
    };
}

/// Asserts that an error's display form contains every given fragment.
#[macro_export]
macro_rules! assert_err_contains {
    ($err:expr, $($fragment:expr),+ $(,)?) => {{
        let msg = $err.to_string();
        $(
            assert!(
                msg.contains($fragment),
                "error should mention `{}`, got: {}",
                $fragment,
                msg
            );
        )+
    }};
}
