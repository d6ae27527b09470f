use foodorders::config::Config;
use foodorders::db::Db;

pub struct State {
    pub cfg: Box<dyn Config>,
    pub db: Box<dyn Db>,
}

impl State {
    pub fn new(cfg: Box<dyn Config>) -> Result<State, String> {
        let db = foodorders::db::open(&*cfg)
            .map_err(|e| e.to_string())?;
        Ok(State {
            cfg,
            db: Box::new(db),
        })
    }
}
