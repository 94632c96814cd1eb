//! # 规格解析集成测试
//!
//! 测试 JSON / 标签 → AttributeMap → BorderSpec → RGBA 的完整链路。

use border_spec::{
    AspectRatio, BorderParams, BorderSpec, Fit, MarkupError, ResolvedMargins, Rgba, SpecError,
};

const JSON_SPEC: &str = r##"
{
  "width": 1280,
  "height": 720,
  "colors": ["#0dc1fd", "#d915ef", "#ff3f2ecc"],
  "colorBack": "#000000",
  "roundness": 1,
  "thickness": 0,
  "softness": 0.75,
  "aspectRatio": "square",
  "intensity": 0.2,
  "bloom": 0.45,
  "spots": 3,
  "spotSize": 0.4,
  "pulse": 0.5,
  "smoke": 1,
  "smokeSize": 0,
  "speed": 1,
  "scale": 0.6,
  "marginLeft": 0,
  "marginRight": 0,
  "marginTop": 0,
  "marginBottom": 0
}
"##;

const JSX_SPEC: &str = r##"
<PulsingBorder
  width={1280}
  height={720}
  colors={["#0dc1fd", "#d915ef", "#ff3f2ecc"]}
  colorBack="#000000"
  roundness={1}
  thickness={0}
  softness={0.75}
  aspectRatio="square"
  intensity={0.2}
  bloom={0.45}
  spots={3}
  spotSize={0.4}
  pulse={0.5}
  smoke={1}
  smokeSize={0}
  speed={1}
  scale={0.6}
  marginLeft={0}
  marginRight={0}
  marginTop={0}
  marginBottom={0}
/>
"##;

/// 测试 JSON 规格
#[test]
fn test_parses_json_spec() {
    let spec = BorderSpec::from_json(JSON_SPEC).unwrap();
    assert_eq!(spec.width, Some(1280));
    assert_eq!(spec.height, Some(720));
    assert_eq!(spec.params.colors.len(), 3);
    assert_eq!(spec.params.aspect_ratio, AspectRatio::Square);
    assert_eq!(spec.params.spots, 3);
    assert_eq!(spec.params.bloom, 0.45);
    assert_eq!(spec.params.smoke_size, 0.0);
}

/// 测试标签规格
#[test]
fn test_parses_jsx_snippet() {
    let spec = BorderSpec::from_markup(JSX_SPEC).unwrap();
    assert_eq!(spec.width, Some(1280));
    assert_eq!(spec.height, Some(720));
    assert_eq!(spec.params.colors.len(), 3);
    assert_eq!(spec.params.aspect_ratio, AspectRatio::Square);
}

/// 两种输入得到相同的记录
#[test]
fn test_json_and_markup_are_equivalent() {
    assert_eq!(
        BorderSpec::from_json(JSON_SPEC).unwrap(),
        BorderSpec::from_markup(JSX_SPEC).unwrap()
    );

    let json = BorderSpec::from_json(
        r#"{"width":1280,"height":720,"spots":3,"aspectRatio":"square"}"#,
    )
    .unwrap();
    let markup = BorderSpec::from_markup(
        r#"<PulsingBorder width={1280} height={720} spots={3} aspectRatio="square" />"#,
    )
    .unwrap();
    assert_eq!(json, markup);
    assert_eq!(json.params.fit, Fit::Contain);
}

/// 无输入 = 默认值表
#[test]
fn test_no_attributes_yields_default_record() {
    let spec = BorderSpec::from_markup("<PulsingBorder />").unwrap();
    assert_eq!(spec.params, BorderParams::default());

    let spec = BorderSpec::from_json("{}").unwrap();
    assert_eq!(spec.params, BorderParams::default());
}

/// 记录交给渲染层后的颜色与边距转换
#[test]
fn test_consumer_conversions() {
    let spec = BorderSpec::from_markup(
        r##"<PulsingBorder colors={["hsl(120, 100%, 50%)", "rgba(255,0,0,0.5)"]} colorBack="#fff" margin={2} marginLeft={5} />"##,
    )
    .unwrap();

    let palette = spec.params.palette();
    assert_eq!(palette.len(), 2);
    assert!((palette[0].g - 1.0).abs() < 1e-3);
    assert_eq!(palette[1], Rgba::new(1.0, 0.0, 0.0, 0.5));
    assert_eq!(spec.params.background(), Rgba::new(1.0, 1.0, 1.0, 1.0));
    assert_eq!(
        spec.params.resolve_margins(),
        ResolvedMargins {
            left: 2.0,
            right: 2.0,
            top: 2.0,
            bottom: 2.0
        }
    );
}

/// 坏标签整体拒绝，不做部分恢复
#[test]
fn test_malformed_markup_is_rejected() {
    let err = BorderSpec::from_markup("<PulsingBorder spots={3} bloom {0.5} />").unwrap_err();
    assert_eq!(
        err,
        SpecError::Markup(MarkupError::ExpectedEquals {
            name: "bloom".to_string(),
            token: "{0.5} ".to_string(),
        })
    );

    let err = BorderSpec::from_markup("<Border spots={3} />").unwrap_err();
    assert!(matches!(
        err,
        SpecError::Markup(MarkupError::MissingTagOpen { .. })
    ));
}

/// 多线程并发解析互不干扰
#[test]
fn test_concurrent_parsing() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("<PulsingBorder spots={{{i}}} />");
                BorderSpec::from_markup(&text).unwrap().params.spots
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), i as i32);
    }
}
