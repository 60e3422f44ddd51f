use std::ffi::OsString;

use anyhow::{anyhow, Context, Result};

#[derive(Clone, Debug)]
pub struct PreviewArgs {
    pub hour: Option<f64>,
    pub minute: f64,
    pub width: f64,
    pub sweep: bool,
}

impl Default for PreviewArgs {
    fn default() -> Self {
        Self {
            hour: None,
            minute: 0.0,
            width: 1920.0,
            sweep: false,
        }
    }
}

impl PreviewArgs {
    pub fn from_env_args() -> Result<Self> {
        Self::from_iter(std::env::args_os().skip(1))
    }

    fn from_iter<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut parsed = Self::default();

        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            let arg_str = arg.to_string_lossy();
            match arg_str.as_ref() {
                "--hour" => parsed.hour = Some(take_number(&mut iter, "--hour")?),
                "--minute" => parsed.minute = take_number(&mut iter, "--minute")?,
                "--width" => parsed.width = take_number(&mut iter, "--width")?,
                "--sweep" => parsed.sweep = true,
                other => return Err(anyhow!("unknown argument: {other}")),
            }
        }

        Ok(parsed)
    }
}

fn take_number<I>(iter: &mut I, flag: &str) -> Result<f64>
where
    I: Iterator<Item = OsString>,
{
    let Some(value) = iter.next() else {
        return Err(anyhow!("{flag} requires a value"));
    };
    value
        .to_string_lossy()
        .parse::<f64>()
        .with_context(|| format!("invalid value for {flag}"))
}

#[cfg(test)]
mod tests {
    use super::PreviewArgs;
    use std::ffi::OsString;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn defaults_preview_the_configured_time() {
        let parsed = PreviewArgs::from_iter(Vec::<OsString>::new()).unwrap();
        assert!(parsed.hour.is_none());
        assert_eq!(parsed.minute, 0.0);
        assert_eq!(parsed.width, 1920.0);
        assert!(!parsed.sweep);
    }

    #[test]
    fn time_and_width_flags_parse() {
        let parsed =
            PreviewArgs::from_iter(args(&["--hour", "18", "--minute", "45", "--width", "1280"]))
                .unwrap();
        assert_eq!(parsed.hour, Some(18.0));
        assert_eq!(parsed.minute, 45.0);
        assert_eq!(parsed.width, 1280.0);
    }

    #[test]
    fn sweep_flag_enables_the_sweep() {
        let parsed = PreviewArgs::from_iter(args(&["--sweep"])).unwrap();
        assert!(parsed.sweep);
    }

    #[test]
    fn missing_value_is_an_error() {
        assert!(PreviewArgs::from_iter(args(&["--hour"])).is_err());
    }

    #[test]
    fn non_numeric_value_is_an_error() {
        assert!(PreviewArgs::from_iter(args(&["--hour", "noon"])).is_err());
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(PreviewArgs::from_iter(args(&["--frobnicate"])).is_err());
    }
}
