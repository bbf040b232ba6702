/// Declares a register group template in place.
///
/// Expands to a [`GroupDef`](crate::def::GroupDef) expression; call
/// [`build`](crate::def::GroupDef::build) on the result to obtain the
/// resolved tree. Replication is written either as `stride STRIDE * COUNT`
/// or as `offsets [0, ..]`, and access modes are `ro`, `wo` or `rw`.
///
/// # Examples
///
/// ```
/// use ral_model::group_def;
///
/// let echo = group_def! {
///     group EchoX @ 0x2004_0000 stride 0x1000 * 2 {
///         register Albatross @ 0x00 rw {
///             field Kvm @ 1, 13;
///             field Ecdsa @ 31, 1;
///         }
///         group BearX @ 0x20 stride 0x20 * 3 {
///             register Bear @ 0x00 ro {
///                 field Tcp @ 0, 9;
///                 field Udp @ 10, 9;
///             }
///         }
///     }
/// }
/// .build()
/// .unwrap();
///
/// let bears = echo.replica(1).unwrap().group("BearX").unwrap();
/// assert_eq!(bears.replica(2).unwrap().register("Bear").unwrap().address(), 0x2004_1060);
/// ```
#[macro_export]
macro_rules! group_def {
    (group $name:ident @ $addr:literal { $($body:tt)* }) => {
        $crate::group_def!(@children $crate::def::GroupDef::new(stringify!($name), $addr), $($body)*)
    };
    (group $name:ident @ $addr:literal stride $stride:literal * $count:literal { $($body:tt)* }) => {
        $crate::group_def!(
            @children $crate::def::GroupDef::new(stringify!($name), $addr).stride($stride, $count),
            $($body)*
        )
    };
    (group $name:ident @ $addr:literal offsets [$($offset:literal),+ $(,)?] { $($body:tt)* }) => {
        $crate::group_def!(
            @children
            $crate::def::GroupDef::new(stringify!($name), $addr).offsets(::std::vec![$($offset),+]),
            $($body)*
        )
    };
    (@children $def:expr,) => { $def };
    (@children $def:expr, register $name:ident @ $offset:literal $access:ident { $($fields:tt)* } $($rest:tt)*) => {
        $crate::group_def!(
            @children
            $def.register($crate::group_def!(
                @fields
                $crate::def::RegisterDef::new(
                    stringify!($name),
                    $offset,
                    $crate::group_def!(@access $access),
                ),
                $($fields)*
            )),
            $($rest)*
        )
    };
    (@children $def:expr, group $name:ident @ $addr:literal { $($body:tt)* } $($rest:tt)*) => {
        $crate::group_def!(
            @children $def.group($crate::group_def!(group $name @ $addr { $($body)* })),
            $($rest)*
        )
    };
    (@children $def:expr, group $name:ident @ $addr:literal stride $stride:literal * $count:literal { $($body:tt)* } $($rest:tt)*) => {
        $crate::group_def!(
            @children
            $def.group($crate::group_def!(group $name @ $addr stride $stride * $count { $($body)* })),
            $($rest)*
        )
    };
    (@children $def:expr, group $name:ident @ $addr:literal offsets [$($offset:literal),+ $(,)?] { $($body:tt)* } $($rest:tt)*) => {
        $crate::group_def!(
            @children
            $def.group($crate::group_def!(group $name @ $addr offsets [$($offset),+] { $($body)* })),
            $($rest)*
        )
    };
    (@fields $reg:expr,) => { $reg };
    (@fields $reg:expr, field $name:ident @ $position:literal, $width:literal; $($rest:tt)*) => {
        $crate::group_def!(
            @fields $reg.field($crate::def::FieldDef::new(stringify!($name), $position, $width)),
            $($rest)*
        )
    };
    (@access ro) => { $crate::access::Access::ReadOnly };
    (@access wo) => { $crate::access::Access::WriteOnly };
    (@access rw) => { $crate::access::Access::ReadWrite };
}
