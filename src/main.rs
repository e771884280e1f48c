use shouter::{
    handle, init_logging, init_store, listeners, publish, publish_with, subscribe, HandlerMap,
    ListenerOptions, StoreConfig,
};

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("shouter {} (built {})", shouter::VERSION, shouter::BUILD_DATE);

    // Optional TOML config path as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => StoreConfig::load(path)?,
        None => StoreConfig::default(),
    };
    init_store(config)?;

    let logger = handle(
        HandlerMap::new()
            .on("on_change", |_| {
                tracing::info!("on_change");
                Ok(())
            })
            .on("on_change_with_args", |args| {
                tracing::info!("on_change_with_args {:?}", args);
                Ok(())
            }),
    );
    let once = handle(HandlerMap::new().on("on_change", |_| {
        tracing::info!("single-fire listener notified");
        Ok(())
    }));

    subscribe(logger, ListenerOptions::scoped("main"))?;
    subscribe(once, ListenerOptions::scoped("main").single(true))?;
    tracing::info!("{} listener(s) registered", listeners().len());

    publish_with("main", "on_change", &[], || tracing::info!("callback"));
    publish!("main", "on_change_with_args", "first", "second");
    publish!("main", "on_change");

    tracing::info!("{} listener(s) remain", listeners().len());
    Ok(())
}
