use super::*;

/// Fire the full open/data/close sequence for one field.
fn fire(
    field: Field,
    text: &str,
    builder: &mut RecordBuilder,
    sink: &mut Vec<GameRecord>,
) -> Result<(), InvalidState> {
    field.handle(FieldEvent::Open, builder, sink)?;
    field.handle(FieldEvent::Data(text.as_bytes()), builder, sink)?;
    field.handle(FieldEvent::Close, builder, sink)
}

fn open_game(builder: &mut RecordBuilder, sink: &mut Vec<GameRecord>) {
    Field::Game.handle(FieldEvent::Open, builder, sink).unwrap();
}

fn close_game(builder: &mut RecordBuilder, sink: &mut Vec<GameRecord>) {
    Field::Game
        .handle(FieldEvent::Data(b""), builder, sink)
        .unwrap();
    Field::Game.handle(FieldEvent::Close, builder, sink).unwrap();
}

#[test]
fn game_open_and_close_commits_record() {
    let mut builder = RecordBuilder::new("arcade");
    let mut sink: Vec<GameRecord> = Vec::new();
    open_game(&mut builder, &mut sink);
    assert_eq!(builder.game().unwrap().namespace, "arcade");
    fire(Field::Name, "pacman", &mut builder, &mut sink).unwrap();
    close_game(&mut builder, &mut sink);

    assert!(builder.game().is_none());
    assert_eq!(builder.committed(), 1);
    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].name, "arcade/pacman");
}

#[test]
fn rejected_records_are_counted() {
    let mut builder = RecordBuilder::new("arcade");
    let mut catalog = gamelist_core::Catalog::new();
    for _ in 0..2 {
        Field::Game
            .handle(FieldEvent::Open, &mut builder, &mut catalog)
            .unwrap();
        Field::Name
            .handle(FieldEvent::Data(b"pacman"), &mut builder, &mut catalog)
            .unwrap();
        Field::Game
            .handle(FieldEvent::Close, &mut builder, &mut catalog)
            .unwrap();
    }
    assert_eq!(builder.committed(), 1);
    assert_eq!(builder.rejected(), 1);
    assert_eq!(catalog.len(), 1);
}

#[test]
fn text_fields_are_stored() {
    let mut builder = RecordBuilder::new("arcade");
    let mut sink: Vec<GameRecord> = Vec::new();
    open_game(&mut builder, &mut sink);
    fire(Field::Description, "Pac-Man (Midway)", &mut builder, &mut sink).unwrap();
    fire(Field::Manufacturer, "Namco (Midway license)", &mut builder, &mut sink).unwrap();
    fire(Field::Year, "1980", &mut builder, &mut sink).unwrap();
    fire(Field::CloneOf, "puckman", &mut builder, &mut sink).unwrap();
    fire(Field::RomOf, "puckman", &mut builder, &mut sink).unwrap();

    let game = builder.game().unwrap();
    assert_eq!(game.description, "Pac-Man (Midway)");
    assert_eq!(game.manufacturer, "Namco (Midway license)");
    assert_eq!(game.year, "1980");
    assert_eq!(game.clone_of.as_deref(), Some("arcade/puckman"));
    assert_eq!(game.rom_of.as_deref(), Some("arcade/puckman"));
}

#[test]
fn runnable_no_marks_derived_resource() {
    let mut builder = RecordBuilder::new("arcade");
    let mut sink: Vec<GameRecord> = Vec::new();
    open_game(&mut builder, &mut sink);
    fire(Field::Runnable, "no", &mut builder, &mut sink).unwrap();
    assert!(builder.game().unwrap().is_derived_resource());

    fire(Field::Runnable, "yes", &mut builder, &mut sink).unwrap();
    assert!(!builder.game().unwrap().is_derived_resource());
}

#[test]
fn driver_status_preliminary_is_not_playable() {
    let mut builder = RecordBuilder::new("arcade");
    let mut sink: Vec<GameRecord> = Vec::new();
    open_game(&mut builder, &mut sink);
    fire(Field::DriverStatus, "good", &mut builder, &mut sink).unwrap();
    assert_eq!(builder.game().unwrap().play, PlayLevel::Full);
    fire(Field::DriverStatus, "preliminary", &mut builder, &mut sink).unwrap();
    assert_eq!(builder.game().unwrap().play, PlayLevel::NotPlayable);
}

#[test]
fn color_and_sound_only_raise_play_level() {
    let mut builder = RecordBuilder::new("arcade");
    let mut sink: Vec<GameRecord> = Vec::new();
    open_game(&mut builder, &mut sink);

    fire(Field::DriverSound, "preliminary", &mut builder, &mut sink).unwrap();
    assert_eq!(builder.game().unwrap().play, PlayLevel::MinorIssues);

    fire(Field::DriverColor, "preliminary", &mut builder, &mut sink).unwrap();
    assert_eq!(builder.game().unwrap().play, PlayLevel::MajorIssues);

    // sound after color must not downgrade
    fire(Field::DriverSound, "preliminary", &mut builder, &mut sink).unwrap();
    assert_eq!(builder.game().unwrap().play, PlayLevel::MajorIssues);

    fire(Field::DriverStatus, "preliminary", &mut builder, &mut sink).unwrap();
    fire(Field::DriverColor, "preliminary", &mut builder, &mut sink).unwrap();
    assert_eq!(builder.game().unwrap().play, PlayLevel::NotPlayable);
}

#[test]
fn imperfect_is_not_preliminary() {
    let mut builder = RecordBuilder::new("arcade");
    let mut sink: Vec<GameRecord> = Vec::new();
    open_game(&mut builder, &mut sink);
    fire(Field::DriverColor, "imperfect", &mut builder, &mut sink).unwrap();
    fire(Field::DriverSound, "imperfect", &mut builder, &mut sink).unwrap();
    assert_eq!(builder.game().unwrap().play, PlayLevel::Full);
}

#[test]
fn rom_sizes_add_up_unless_merged() {
    let mut builder = RecordBuilder::new("arcade");
    let mut sink: Vec<GameRecord> = Vec::new();
    open_game(&mut builder, &mut sink);

    for (size, merged) in [("100", false), ("200", false), ("50", true)] {
        Field::Rom
            .handle(FieldEvent::Open, &mut builder, &mut sink)
            .unwrap();
        assert_eq!(builder.rom(), RomEntry::default());
        fire(Field::RomSize, size, &mut builder, &mut sink).unwrap();
        if merged {
            fire(Field::RomMerge, "pacman.6e", &mut builder, &mut sink).unwrap();
        }
        Field::Rom
            .handle(FieldEvent::Data(b""), &mut builder, &mut sink)
            .unwrap();
        Field::Rom
            .handle(FieldEvent::Close, &mut builder, &mut sink)
            .unwrap();
    }

    assert_eq!(builder.game().unwrap().size, 300);
}

#[test]
fn empty_merge_value_still_counts_as_merged() {
    let mut builder = RecordBuilder::new("arcade");
    let mut sink: Vec<GameRecord> = Vec::new();
    open_game(&mut builder, &mut sink);
    Field::Rom
        .handle(FieldEvent::Open, &mut builder, &mut sink)
        .unwrap();
    fire(Field::RomSize, "4096", &mut builder, &mut sink).unwrap();
    fire(Field::RomMerge, "", &mut builder, &mut sink).unwrap();
    assert!(builder.rom().merge);
    Field::Rom
        .handle(FieldEvent::Close, &mut builder, &mut sink)
        .unwrap();
    assert_eq!(builder.game().unwrap().size, 0);
}

#[test]
fn rom_close_without_game_is_invalid_state() {
    let mut builder = RecordBuilder::new("arcade");
    let mut sink: Vec<GameRecord> = Vec::new();
    Field::Rom
        .handle(FieldEvent::Open, &mut builder, &mut sink)
        .unwrap();
    // size is transient state and does not need a game
    fire(Field::RomSize, "16", &mut builder, &mut sink).unwrap();
    assert_eq!(
        Field::Rom.handle(FieldEvent::Close, &mut builder, &mut sink),
        Err(InvalidState)
    );
}

#[test]
fn devices_collect_name_and_extensions() {
    let mut builder = RecordBuilder::new("mess");
    let mut sink: Vec<GameRecord> = Vec::new();
    open_game(&mut builder, &mut sink);

    Field::Device
        .handle(FieldEvent::Open, &mut builder, &mut sink)
        .unwrap();
    fire(Field::DeviceName, "cartridge", &mut builder, &mut sink).unwrap();
    fire(Field::DeviceExtensionName, "nes", &mut builder, &mut sink).unwrap();
    fire(Field::DeviceExtensionName, "unf", &mut builder, &mut sink).unwrap();
    assert_eq!(builder.device().unwrap().name, "cartridge");
    Field::Device
        .handle(FieldEvent::Close, &mut builder, &mut sink)
        .unwrap();

    assert!(builder.device().is_none());
    let devices = &builder.game().unwrap().devices;
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].extensions, vec!["nes", "unf"]);
}

#[test]
fn device_fields_without_device_are_invalid_state() {
    let mut builder = RecordBuilder::new("mess");
    let mut sink: Vec<GameRecord> = Vec::new();
    open_game(&mut builder, &mut sink);
    assert_eq!(
        fire(Field::DeviceName, "cartridge", &mut builder, &mut sink),
        Err(InvalidState)
    );
    assert_eq!(
        fire(Field::DeviceExtensionName, "nes", &mut builder, &mut sink),
        Err(InvalidState)
    );
}

#[test]
fn device_close_without_game_is_invalid_state() {
    let mut builder = RecordBuilder::new("mess");
    let mut sink: Vec<GameRecord> = Vec::new();
    Field::Device
        .handle(FieldEvent::Open, &mut builder, &mut sink)
        .unwrap();
    assert_eq!(
        Field::Device.handle(FieldEvent::Close, &mut builder, &mut sink),
        Err(InvalidState)
    );
}

#[test]
fn game_fields_without_game_are_invalid_state() {
    let fields = [
        Field::Runnable,
        Field::Name,
        Field::Description,
        Field::Manufacturer,
        Field::Year,
        Field::CloneOf,
        Field::RomOf,
        Field::DriverStatus,
        Field::DriverColor,
        Field::DriverSound,
        Field::VideoScreen,
        Field::VideoOrientation,
        Field::VideoWidth,
        Field::VideoHeight,
        Field::VideoAspectX,
        Field::VideoAspectY,
    ];
    for field in fields {
        let mut builder = RecordBuilder::new("arcade");
        let mut sink: Vec<GameRecord> = Vec::new();
        assert_eq!(
            fire(field, "1", &mut builder, &mut sink),
            Err(InvalidState),
            "{:?}",
            field
        );
    }
}

#[test]
fn game_close_without_game_is_invalid_state() {
    let mut builder = RecordBuilder::new("arcade");
    let mut sink: Vec<GameRecord> = Vec::new();
    assert_eq!(
        Field::Game.handle(FieldEvent::Close, &mut builder, &mut sink),
        Err(InvalidState)
    );
    assert!(sink.is_empty());
}

#[test]
fn video_fields_set_flags_and_geometry() {
    let mut builder = RecordBuilder::new("arcade");
    let mut sink: Vec<GameRecord> = Vec::new();
    open_game(&mut builder, &mut sink);
    fire(Field::VideoScreen, "vector", &mut builder, &mut sink).unwrap();
    fire(Field::VideoOrientation, "vertical", &mut builder, &mut sink).unwrap();
    fire(Field::VideoWidth, "224", &mut builder, &mut sink).unwrap();
    fire(Field::VideoHeight, "288", &mut builder, &mut sink).unwrap();
    fire(Field::VideoAspectX, "3", &mut builder, &mut sink).unwrap();
    fire(Field::VideoAspectY, "4", &mut builder, &mut sink).unwrap();

    let game = builder.game().unwrap();
    assert!(game.is_vector());
    assert!(game.is_vertical());
    assert_eq!((game.width, game.height), (224, 288));
    assert_eq!((game.aspect_x, game.aspect_y), (3, 4));
}

#[test]
fn raster_horizontal_clears_flags() {
    let mut builder = RecordBuilder::new("arcade");
    let mut sink: Vec<GameRecord> = Vec::new();
    open_game(&mut builder, &mut sink);
    fire(Field::VideoScreen, "vector", &mut builder, &mut sink).unwrap();
    fire(Field::VideoScreen, "raster", &mut builder, &mut sink).unwrap();
    fire(Field::VideoOrientation, "horizontal", &mut builder, &mut sink).unwrap();
    assert!(builder.game().unwrap().flags.is_empty());
}

#[test]
fn parse_leading_u64_follows_atoi() {
    assert_eq!(parse_leading_u64("16384"), 16384);
    assert_eq!(parse_leading_u64("  42"), 42);
    assert_eq!(parse_leading_u64("+7"), 7);
    assert_eq!(parse_leading_u64("12abc"), 12);
    assert_eq!(parse_leading_u64("abc"), 0);
    assert_eq!(parse_leading_u64(""), 0);
    assert_eq!(parse_leading_u64("-5"), 0);
    assert_eq!(parse_leading_u64("99999999999999999999999"), u64::MAX);
}

#[test]
fn geometry_saturates_at_u32() {
    assert_eq!(parse_leading_u32("4294967296"), u32::MAX);
    assert_eq!(parse_leading_u32("640"), 640);
}

#[test]
fn non_utf8_data_is_invalid_state() {
    let mut builder = RecordBuilder::new("arcade");
    let mut sink: Vec<GameRecord> = Vec::new();
    open_game(&mut builder, &mut sink);
    let result = Field::Description.handle(FieldEvent::Data(b"Pac\xffMan"), &mut builder, &mut sink);
    assert_eq!(result, Err(InvalidState));
    assert!(builder.game().unwrap().description.is_empty());
}
