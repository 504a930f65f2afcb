use roconfig::{AttributeSource, ReadOnlyConfig};

fn main() -> Result<(), roconfig::Error> {
    // Attributes are owned by their scope; the adapter only reads them.
    let mut attributes = AttributeSource::new();
    attributes.set("app.name", "demo");
    attributes.set("app.listeners", "alpha, beta, gamma");
    attributes.set("app.workers", 4i64);

    let config = ReadOnlyConfig::builder().with_source(attributes).build()?;

    println!("empty: {}", config.is_empty()?);
    println!("listeners: {:?}", config.get("app.listeners")?);

    let workers: Option<i64> = config.get_as("app.workers")?;
    println!("workers: {:?}", workers);

    // Mutation is rejected at the adapter layer.
    println!("remove: {:?}", config.remove_property("app.name"));

    Ok(())
}
