/// 调用者的权限级别，启动时计算一次并显式传递
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivilegeLevel {
    /// root 等价权限
    Elevated,
    /// 普通用户
    Standard,
}

impl PrivilegeLevel {
    /// 根据用户 ID 分类，0 为 root
    pub fn classify(uid: u32) -> Self {
        if uid == 0 {
            PrivilegeLevel::Elevated
        } else {
            PrivilegeLevel::Standard
        }
    }

    /// 读取当前进程的有效用户 ID 并分类
    pub fn current() -> Self {
        match effective_user_id() {
            Some(uid) => Self::classify(uid),
            None => PrivilegeLevel::Standard,
        }
    }

    pub fn is_elevated(&self) -> bool {
        *self == PrivilegeLevel::Elevated
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrivilegeLevel::Elevated => "root",
            PrivilegeLevel::Standard => "普通用户",
        }
    }
}

#[cfg(unix)]
pub fn effective_user_id() -> Option<u32> {
    Some(nix::unistd::geteuid().as_raw())
}

#[cfg(not(unix))]
pub fn effective_user_id() -> Option<u32> {
    None
}
