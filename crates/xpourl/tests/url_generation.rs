use std::fs;

use tempfile::TempDir;
use xpourl::format::FormatPolicy;
use xpourl::generator::UrlGenerator;
use xpourl::keys::{KeySet, COLOR_KEY_SET, DESIGN_KEY_SET, OVERLAY_KEY_SET};
use xpourl::model::{Design, Overlay, OverlayLocation, OverlayTime, XpoObject};
use xpourl::request::UrlRequest;
use xpourl::token;

fn scene() -> UrlRequest {
    UrlRequest {
        width: Some(640),
        objects: vec![
            XpoObject::design(
                0,
                Design {
                    gloss: 5,
                    width: 120.0,
                    ..Design::new("oak")
                },
            ),
            XpoObject::color(1, "#336699"),
            XpoObject::design(
                3,
                Design {
                    gloss: 9,
                    rotation: 45.5,
                    ..Design::new("walnut")
                },
            ),
            // overrides the first walnut entry at index 3
            XpoObject::design(
                3,
                Design {
                    gloss: 2,
                    ..Design::new("pine")
                },
            ),
        ],
        overlays: vec![Overlay {
            time: OverlayTime::AfterResize,
            location: Some(OverlayLocation { x: 12.0, y: 0.5 }),
            ..Overlay::new(1, "logo.png")
        }],
        ..UrlRequest::new("kitchen")
    }
}

#[test]
fn full_scene_url() {
    let generator = UrlGenerator::new("https://render.example.com/xpo", FormatPolicy::default());
    let url = generator.url(&scene()).unwrap();

    let expected = format!(
        "https://render.example.com/xpo/image?p={}&w=640\
         &p.d={},,,{}&p.tw=120&p.tg=5,,,2\
         &p.c=,336699\
         &p.ol=,12:0.5&p.om=,0&p.ot=,1&p.oo=,0&p.on=,{}",
        token::encode("kitchen"),
        token::encode("oak"),
        token::encode("pine"),
        token::encode("logo.png"),
    );
    assert_eq!(url, expected);
}

#[test]
fn attribute_lists_stay_aligned() {
    let request = scene();
    let policy = FormatPolicy::default();

    // every object list is addressed by the same index: split and compare lengths
    for fragment in DESIGN_KEY_SET.fragments(&request.objects, &policy) {
        let (_, list) = fragment.split_once('=').unwrap();
        let positions = list.split(',').count();
        assert!(positions <= 4, "{fragment} has {positions} positions");
    }

    let fragments = DESIGN_KEY_SET.fragments(&request.objects, &policy);
    assert!(fragments.contains(&"p.tg=5,,,2".to_string()));
    assert!(!fragments.iter().any(|f| f.starts_with("p.tr=")));
}

#[test]
fn key_sets_are_usable_on_their_own() {
    fn append<T: xpourl::model::IndexedItem + 'static>(set: &KeySet<T>, items: &[T]) -> String {
        let mut buffer = String::new();
        set.append_to(&mut buffer, items);
        buffer
    }

    let request = scene();
    assert_eq!(append(&COLOR_KEY_SET, &request.objects), "&p.c=,336699");
    assert!(append(&OVERLAY_KEY_SET, &request.overlays).starts_with("&p.ol=,12:0.5"));
    assert_eq!(append(&OVERLAY_KEY_SET, &[]), "");
}

#[test]
fn request_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("request.json");
    fs::write(&path, serde_json::to_string_pretty(&scene()).unwrap()).unwrap();

    let loaded = UrlRequest::load(&path).unwrap();
    assert_eq!(loaded, scene());

    let generator = UrlGenerator::default();
    assert_eq!(
        generator.url(&loaded).unwrap(),
        generator.url(&scene()).unwrap()
    );
}
