use bagolife_lib::{
    derive_palette,
    palette::{gradient, gradient_colors, interpolate, Colors, DEAD_COLOR, PALETTES},
    Error as BagError, Rgb, Selection,
};
use std::error::Error;

fn fixed(index: usize) -> &'static [Rgb] {
    match PALETTES[index].colors {
        Colors::Fixed(colors) => colors,
        Colors::Gradient => panic!("{} is procedural", PALETTES[index].name),
    }
}

#[test]
fn catalog() {
    assert_eq!(PALETTES.len(), 11);
    assert_eq!(PALETTES[0].name, "Rainbow");
    assert_eq!(PALETTES[5].colors, Colors::Gradient);
    assert_eq!(fixed(2).len(), 11);
    assert_eq!(fixed(4).len(), 14);
    assert_eq!(fixed(0)[15], Rgb::new(0x8F, 0x00, 0xFF));
}

#[test]
fn full_palette_unchanged() -> Result<(), Box<dyn Error>> {
    let palette = derive_palette(&Selection::Catalog(0), false, 15, false, true)?;
    assert_eq!(palette.name(), "Rainbow");
    assert_eq!(palette.colors(), fixed(0));
    assert_eq!(palette.dead_color(), DEAD_COLOR);

    let reversed = derive_palette(&Selection::Catalog(0), true, 15, false, true)?;
    let mut expected = fixed(0).to_vec();
    expected.reverse();
    assert_eq!(reversed.colors(), expected);
    Ok(())
}

#[test]
fn interpolate_to_age_limit() -> Result<(), Box<dyn Error>> {
    let palette = derive_palette(&Selection::Catalog(2), false, 31, false, true)?;
    let colors = palette.colors();
    assert_eq!(colors.len(), 32);
    let anchors = [0, 4, 8, 11, 14, 17, 20, 23, 26, 29];
    for (&index, &anchor) in anchors.iter().zip(fixed(2)) {
        assert_eq!(colors[index], anchor);
    }
    assert_eq!(
        colors[..5],
        [
            Rgb::new(255, 186, 8),
            Rgb::new(192, 141, 21),
            Rgb::new(129, 96, 35),
            Rgb::new(66, 51, 48),
            Rgb::new(3, 7, 62),
        ]
    );
    assert_eq!(colors[31], Rgb::new(253, 178, 7));
    Ok(())
}

#[test]
fn interpolate_remainder_goes_first() {
    let colors = interpolate(fixed(2), 16);
    assert_eq!(colors.len(), 16);
    assert_eq!(colors[0], Rgb::new(255, 186, 8));
    assert_eq!(colors[1], Rgb::new(129, 96, 35));
    assert_eq!(colors[2], Rgb::new(3, 7, 62));
    assert_eq!(colors[3], Rgb::new(29, 6, 42));
    assert_eq!(colors[15], Rgb::new(250, 163, 7));
}

#[test]
fn interpolate_truncates() {
    assert_eq!(interpolate(fixed(0), 4), fixed(0)[..4]);
    let single = [Rgb::new(1, 2, 3)];
    assert_eq!(interpolate(&single, 3), vec![single[0]; 3]);
}

#[test]
fn gradient_palette() -> Result<(), Box<dyn Error>> {
    let colors = gradient_colors(15);
    assert_eq!(
        colors,
        [
            (0, 20, 0),
            (0, 45, 0),
            (0, 71, 0),
            (0, 97, 0),
            (0, 122, 0),
            (0, 148, 0),
            (0, 174, 0),
            (0, 200, 0),
            (33, 183, 0),
            (66, 166, 0),
            (100, 150, 0),
            (133, 133, 0),
            (166, 116, 0),
            (200, 100, 0),
        ]
        .map(|(r, g, b)| Rgb::new(r, g, b))
    );
    assert_eq!(gradient_colors(31).len(), 30);

    let palette = derive_palette(&Selection::Catalog(5), false, 15, false, true)?;
    assert_eq!(palette.colors(), colors);
    assert_eq!(gradient(Rgb::new(1, 2, 3), Rgb::new(9, 9, 9), 1), [Rgb::new(1, 2, 3)]);
    Ok(())
}

#[test]
fn flicker_reduction() -> Result<(), Box<dyn Error>> {
    let tinted = derive_palette(&Selection::Catalog(0), true, 15, true, true)?;
    assert_eq!(tinted.dead_color(), Rgb::new(85, 0, 153));
    assert_eq!(tinted.color(0), Rgb::new(85, 0, 153));

    let plain = derive_palette(&Selection::Catalog(0), false, 15, true, true)?;
    assert_eq!(plain.dead_color(), Rgb::new(153, 0, 0));

    let off = derive_palette(&Selection::Catalog(0), true, 15, true, false)?;
    assert_eq!(off.dead_color(), DEAD_COLOR);
    Ok(())
}

#[test]
fn color_of_age() -> Result<(), Box<dyn Error>> {
    let palette = derive_palette(&Selection::Catalog(0), false, 15, false, true)?;
    assert_eq!(palette.color(1), fixed(0)[0]);
    assert_eq!(palette.color(16), fixed(0)[15]);
    assert_eq!(palette.color(1000), fixed(0)[15]);
    Ok(())
}

#[test]
fn custom_palette() -> Result<(), Box<dyn Error>> {
    let colors = vec![Rgb::from_hex("#000000")?, "ff0000".parse::<Rgb>()?];
    let palette = derive_palette(&Selection::Custom(colors), false, 3, false, true)?;
    assert_eq!(palette.name(), "Custom");
    assert_eq!(
        palette.colors(),
        [
            Rgb::new(0, 0, 0),
            Rgb::new(63, 0, 0),
            Rgb::new(127, 0, 0),
            Rgb::new(191, 0, 0),
        ]
    );
    assert_eq!(Rgb::new(255, 128, 0).to_string(), "FF8000");
    Ok(())
}

#[test]
fn palette_errors() {
    assert_eq!(
        derive_palette(&Selection::Catalog(11), false, 15, false, true),
        Err(BagError::UnknownPalette(11))
    );
    assert_eq!(
        derive_palette(&Selection::Custom(Vec::new()), false, 15, false, true),
        Err(BagError::EmptyPalette(String::from("Custom")))
    );
    assert_eq!(
        Rgb::from_hex("12345G"),
        Err(BagError::InvalidColor(String::from("12345G")))
    );
    assert!(Rgb::from_hex("#FFF").is_err());
}
