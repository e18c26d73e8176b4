/// Define a mock server that answers every request with the same response.
///
/// ```ignore
/// let m = mock! {
///     status: 200,
///     headers {
///         "content-type": "application/json",
///     }
///     body: r#"{"ok":true}"#,
/// };
/// ```
#[macro_export]
macro_rules! mock {
    ($($inner:tt)*) => {{
        $crate::Mock::new(move |_: &$crate::Request| {
            #[allow(unused_mut)]
            let mut response = $crate::Response::default();

            $crate::__mock_impl!(@response(response) $($inner)*);

            Some(response)
        })
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __mock_impl {
    (@response($response:ident) status: $status:expr, $($tail:tt)*) => {
        $response.status_code = $status as u16;

        $crate::__mock_impl!(@response($response) $($tail)*)
    };

    (@response($response:ident) body: $body:expr, $($tail:tt)*) => {
        $response.body = ::std::convert::Into::<Vec<u8>>::into($body);

        $crate::__mock_impl!(@response($response) $($tail)*)
    };

    (@response($response:ident) headers {
        $(
            $name:literal: $value:expr,
        )*
    } $($tail:tt)*) => {
        $(
            $response.headers.push(($name.to_string(), $value.to_string()));
        )*

        $crate::__mock_impl!(@response($response) $($tail)*)
    };

    (@response($response:ident)) => {};
}
