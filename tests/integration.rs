use image::{Rgb, RgbImage, Rgba};
use signature_extract::{
    load_image, run, Error, ExtractConfig, ExtractOptions, SignatureExtractor, TRANSPARENT,
};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

#[test]
fn solid_black_image_is_kept_verbatim() {
    let img = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
    let out = SignatureExtractor::default().extract(&img);

    assert_eq!(out.dimensions(), (10, 10));
    assert!(out.pixels().all(|px| *px == Rgba([0, 0, 0, 255])));
}

#[test]
fn solid_white_image_becomes_transparent() {
    let img = RgbImage::from_pixel(10, 10, WHITE);
    let out = SignatureExtractor::default().extract(&img);

    assert_eq!(out.dimensions(), (10, 10));
    assert!(out.pixels().all(|px| px[3] == 0));
}

#[test]
fn single_blue_pixel_is_kept() {
    let img = RgbImage::from_pixel(1, 1, Rgb([0, 0, 255]));
    let out = SignatureExtractor::default().extract(&img);

    assert_eq!(*out.get_pixel(0, 0), Rgba([0, 0, 255, 255]));
}

#[test]
fn mixed_scan_keeps_only_ink() {
    // Light paper with a dark stroke on the middle row and a pale smudge.
    let mut img = RgbImage::from_pixel(8, 5, Rgb([245, 240, 230]));
    for x in 1..7 {
        img.put_pixel(x, 2, Rgb([20, 25, 90]));
    }
    img.put_pixel(6, 4, Rgb([220, 220, 210]));

    let out = SignatureExtractor::default().extract(&img);

    for (x, y, px) in out.enumerate_pixels() {
        let src = img.get_pixel(x, y);
        if y == 2 && (1..7).contains(&x) {
            assert_eq!(*px, Rgba([src[0], src[1], src[2], 255]), "ink at ({x},{y})");
        } else {
            assert_eq!(px[3], 0, "background at ({x},{y})");
        }
    }
}

#[test]
fn retained_pixels_are_never_blended() {
    let img = RgbImage::from_fn(12, 9, |x, y| {
        if (x + y) % 3 == 0 {
            Rgb([10, 40, 200])
        } else {
            Rgb([250, 250, 250])
        }
    });
    let out = SignatureExtractor::default().extract(&img);

    for (x, y, px) in out.enumerate_pixels() {
        if px[3] != 0 {
            let src = img.get_pixel(x, y);
            assert_eq!(*px, Rgba([src[0], src[1], src[2], 255]));
        } else {
            assert_eq!(*px, TRANSPARENT);
        }
    }
}

#[test]
fn run_writes_transparent_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scan.png");
    let output = dir.path().join("nested").join("signature.png");

    let mut img = RgbImage::from_pixel(6, 6, WHITE);
    img.put_pixel(2, 2, Rgb([0, 0, 0]));
    img.put_pixel(3, 2, Rgb([0, 0, 255]));
    img.save(&input).unwrap();

    let config = ExtractConfig {
        input,
        output: output.clone(),
        options: ExtractOptions::default(),
    };
    let summary = run(&config).unwrap();
    assert_eq!((summary.width, summary.height), (6, 6));
    assert_eq!(summary.retained, 2);

    let written = image::open(&output).unwrap().to_rgba8();
    assert_eq!(written.dimensions(), (6, 6));
    assert_eq!(*written.get_pixel(2, 2), Rgba([0, 0, 0, 255]));
    assert_eq!(*written.get_pixel(3, 2), Rgba([0, 0, 255, 255]));
    assert_eq!(written.get_pixel(0, 0)[3], 0);
}

#[test]
fn unreadable_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.png");

    let config = ExtractConfig {
        input: dir.path().join("missing.png"),
        output: output.clone(),
        options: ExtractOptions::default(),
    };
    assert!(run(&config).is_err());
    assert!(!output.exists());
}

#[test]
fn corrupt_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("corrupt.png");
    std::fs::write(&input, b"definitely not a png").unwrap();
    let output = dir.path().join("out.png");

    let err = SignatureExtractor::default()
        .process_file(&input, &output)
        .unwrap_err();
    assert!(matches!(err, Error::Image(_)));
    assert!(!output.exists());
}

#[test]
fn jpeg_output_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scan.png");
    RgbImage::from_pixel(3, 3, Rgb([0, 0, 0]))
        .save(&input)
        .unwrap();
    let output = dir.path().join("out.jpg");

    let err = SignatureExtractor::default()
        .process_file(&input, &output)
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
    assert!(!output.exists());
}

#[test]
fn load_image_drops_input_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rgba.png");
    image::RgbaImage::from_pixel(2, 2, Rgba([0, 0, 255, 10]))
        .save(&input)
        .unwrap();

    let loaded = load_image(&input).unwrap();
    assert_eq!(*loaded.get_pixel(1, 1), Rgb([0, 0, 255]));
}

#[test]
fn rejected_output_leaves_disk_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scan.png");
    RgbImage::from_pixel(3, 3, Rgb([0, 0, 0]))
        .save(&input)
        .unwrap();
    let output_dir = dir.path().join("newdir");

    let err = SignatureExtractor::default()
        .process_file(&input, &output_dir.join("out.jpg"))
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
    assert!(!output_dir.exists());
}
