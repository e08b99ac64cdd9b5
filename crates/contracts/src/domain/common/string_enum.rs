/// Closed set of display strings with an `Other` fallback.
///
/// Mock data is authored by hand, so an unexpected value must still load:
/// it lands in `Other(String)` and simply matches no named variant.
///
/// ```ignore
/// string_enum! {
///     pub enum DealStatus {
///         Approved => "Approved",
///         AtRisk => "At Risk",
///     }
/// }
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            /// Display strings of the named variants, in declaration order.
            pub const LABELS: &'static [&'static str] = &[$($text),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $text,)+
                    $name::Other(value) => value.as_str(),
                }
            }

            pub fn parse(value: &str) -> Self {
                match value {
                    $($text => $name::$variant,)+
                    other => $name::Other(other.to_string()),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok($name::parse(&value))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    crate::string_enum! {
        enum Color {
            Red => "Red",
            DarkBlue => "Dark Blue",
        }
    }

    #[test]
    fn known_and_unknown_values() {
        let parsed: Vec<Color> = serde_json::from_str(r#"["Dark Blue","Magenta"]"#).unwrap();
        assert_eq!(parsed[0], Color::DarkBlue);
        assert_eq!(parsed[1], Color::Other("Magenta".to_string()));
        assert!(!parsed[1].is_known());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#"["Dark Blue","Magenta"]"#);
        assert_eq!(Color::LABELS, &["Red", "Dark Blue"]);
        assert_eq!(Color::Red.to_string(), "Red");
    }
}
