/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 127.0.0.1 | 监听地址 |
/// | HTTP_PORT | 5000 | HTTP 服务端口 |
/// | BILL_FILE | bills.csv | 账单记录文件 |
/// | SAVE_REQUIRE_VALID_READINGS | false | 保存时是否校验 end >= start |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志文件目录 (按天滚动) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 BILL_FILE=/data/bills.csv cargo run -p fare-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 监听地址 (IP 或主机名)
    pub http_host: String,
    /// HTTP 服务端口
    pub http_port: u16,
    /// 账单记录文件路径
    pub bill_file: String,
    /// 保存账单时也拒绝 end < start
    pub require_valid_readings_on_save: bool,
    /// 日志级别
    pub log_level: String,
    /// 日志目录，未设置时输出到 stdout
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            bill_file: std::env::var("BILL_FILE").unwrap_or_else(|_| "bills.csv".into()),
            require_valid_readings_on_save: std::env::var("SAVE_REQUIRE_VALID_READINGS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(bill_file: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.bill_file = bill_file.into();
        config.http_port = http_port;
        config
    }

    /// host:port, for logs
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
